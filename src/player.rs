//! Real-time audio output using cpal
//!
//! Rendered samples travel through a lock-free ring buffer: the cpal callback
//! pops, the caller pushes. The ring holds ~250 ms of audio, so writes block
//! on real playback time and provide the pacing for the whole engine.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::traits::{Consumer, Observer, Producer, Split};
use ringbuf::HeapRb;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

use crate::error::ToneError;

type RingProducer = ringbuf::HeapProd<f32>;
type RingConsumer = ringbuf::HeapCons<f32>;

const PUSH_RETRY: Duration = Duration::from_millis(1);

/// Destination for rendered sample buffers.
///
/// `write` blocks until the sink has accepted the whole buffer, so the call
/// rate is throttled by real playback time. The playback driver is written
/// against this trait so it can run against an in-memory sink in tests.
pub trait AudioSink {
    fn write(&mut self, samples: &[f32]) -> Result<(), ToneError>;

    /// Block until everything previously written has been consumed.
    fn drain(&mut self) -> Result<(), ToneError>;
}

/// Owns the default audio output device for the duration of one playback.
///
/// The stream is closed when the Player is dropped, on every exit path.
pub struct Player {
    _stream: cpal::Stream,
    producer: RingProducer,
    failed: Arc<AtomicBool>,
}

impl Player {
    /// Open the default output device at the given sample rate.
    ///
    /// The stream is mono-logical: one sample per frame, duplicated across
    /// however many channels the device exposes.
    pub fn new(sample_rate: u32) -> Result<Self, ToneError> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| ToneError::DeviceUnavailable("no output device found".into()))?;
        let device_name = device.name().unwrap_or_else(|_| "<unknown>".into());

        let default_config = device
            .default_output_config()
            .map_err(|e| ToneError::DeviceUnavailable(e.to_string()))?;
        let channels = default_config.channels() as usize;

        let config = cpal::StreamConfig {
            channels: default_config.channels(),
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        // ~250ms of mono audio; small enough that blocked writes track real
        // time, large enough to ride out scheduling hiccups.
        let ring = HeapRb::<f32>::new((sample_rate / 4) as usize);
        let (producer, consumer) = ring.split();

        // Set by the stream error callback; a dead stream stops draining the
        // ring, so the write loops watch this instead of spinning forever.
        let failed = Arc::new(AtomicBool::new(false));

        let stream = match default_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &config, consumer, channels, &failed)
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &config, consumer, channels, &failed)
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &config, consumer, channels, &failed)
            }
            format => {
                return Err(ToneError::DeviceUnavailable(format!(
                    "unsupported sample format: {format:?}"
                )))
            }
        }?;

        stream
            .play()
            .map_err(|e| ToneError::Stream(e.to_string()))?;
        info!("audio stream open: {} @ {} Hz", device_name, sample_rate);

        Ok(Self {
            _stream: stream,
            producer,
            failed,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        mut consumer: RingConsumer,
        channels: usize,
        failed: &Arc<AtomicBool>,
    ) -> Result<cpal::Stream, ToneError> {
        let failed = Arc::clone(failed);
        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(channels) {
                        // Underrun plays as silence; the writer catches up.
                        let value = consumer.try_pop().unwrap_or(0.0);
                        for channel in frame.iter_mut() {
                            *channel = T::from_sample(value);
                        }
                    }
                },
                move |err| {
                    error!("audio stream error: {err}");
                    failed.store(true, Ordering::SeqCst);
                },
                None,
            )
            .map_err(|e| ToneError::DeviceUnavailable(e.to_string()))?;

        Ok(stream)
    }
}

impl AudioSink for Player {
    fn write(&mut self, samples: &[f32]) -> Result<(), ToneError> {
        // Device contract is [-1.0, 1.0]; synthesis already honors it, but
        // the sink enforces it regardless.
        let clamped: Vec<f32> = samples.iter().map(|s| s.clamp(-1.0, 1.0)).collect();
        push_all(&mut self.producer, &self.failed, &clamped)
    }

    fn drain(&mut self) -> Result<(), ToneError> {
        wait_drained(&self.producer, &self.failed)
    }
}

/// Push the whole buffer, blocking while the ring is full. Aborts with a
/// stream error once `failed` trips, since a dead stream never frees space.
fn push_all(
    producer: &mut RingProducer,
    failed: &AtomicBool,
    samples: &[f32],
) -> Result<(), ToneError> {
    let mut remaining = samples;
    loop {
        if failed.load(Ordering::SeqCst) {
            return Err(ToneError::Stream("output stream failed".into()));
        }
        if remaining.is_empty() {
            return Ok(());
        }
        let pushed = producer.push_slice(remaining);
        remaining = &remaining[pushed..];
        if pushed == 0 {
            thread::sleep(PUSH_RETRY);
        }
    }
}

/// Block until the ring is empty, aborting if the stream has failed.
fn wait_drained(producer: &RingProducer, failed: &AtomicBool) -> Result<(), ToneError> {
    loop {
        if failed.load(Ordering::SeqCst) {
            return Err(ToneError::Stream("output stream failed".into()));
        }
        if producer.occupied_len() == 0 {
            return Ok(());
        }
        thread::sleep(PUSH_RETRY);
    }
}
