//! Hoerton CLI - play the 1TR110-1 call-progress tones

use clap::{Parser, Subcommand};

use hoerton::playback::{self, PlaybackConfig, RepeatCount, StopHandle, DEFAULT_REPEATS};
use hoerton::player::Player;
use hoerton::tones::CallProgressTone;
use hoerton::{ToneError, SAMPLE_RATE};

#[derive(Parser)]
#[command(name = "hoerton")]
#[command(about = "Synthesize and play German call-progress tones (1TR110-1)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a tone on the default output device
    Play {
        /// Tone name (see `hoerton list`)
        tone: CallProgressToneArg,

        /// Number of times to play the repeating phase
        #[arg(short, long, default_value_t = DEFAULT_REPEATS, conflicts_with = "forever")]
        repeats: u32,

        /// Repeat until Enter is pressed instead of a fixed count
        #[arg(long)]
        forever: bool,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = SAMPLE_RATE)]
        sample_rate: u32,
    },

    /// List the tone catalog with phase cadences
    List,
}

/// clap-friendly wrapper so parse errors surface as usage errors.
#[derive(Clone, Copy)]
struct CallProgressToneArg(CallProgressTone);

impl std::str::FromStr for CallProgressToneArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CallProgressTone>()
            .map(CallProgressToneArg)
            .map_err(|e| e.to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            tone: CallProgressToneArg(tone),
            repeats,
            forever,
            sample_rate,
        } => {
            let config = PlaybackConfig {
                sample_rate,
                repeats: if forever {
                    RepeatCount::Forever
                } else {
                    RepeatCount::Times(repeats)
                },
            };

            let stop = StopHandle::new();
            if forever {
                // Stdin is the stop line for endless playback.
                let handle = stop.clone();
                std::thread::spawn(move || {
                    let mut line = String::new();
                    let _ = std::io::stdin().read_line(&mut line);
                    handle.stop();
                });
                println!("playing {tone} until stopped; press Enter to stop");
            }

            let mut player = Player::new(sample_rate)?;
            match playback::play(tone, &mut player, &config, &stop) {
                Ok(()) => {}
                Err(ToneError::Interrupted) => println!("stopped"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::List => {
            for tone in CallProgressTone::ALL {
                let patterns = tone.patterns();
                println!("{tone}");
                if let Some(intro) = &patterns.intro {
                    println!("  intro:     {}", describe(intro.segments()));
                }
                println!("  repeating: {}", describe(patterns.repeating.segments()));
            }
        }
    }

    Ok(())
}

fn describe(segments: &[hoerton::segment::Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_silence() {
                format!("{:.2}s off", s.duration())
            } else {
                format!("{:.0} Hz {:.2}s", s.frequency(), s.duration())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
