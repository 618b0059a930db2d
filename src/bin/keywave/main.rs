//! keywave - terminal synthesizer keyboard
//!
//! Run with: cargo run [preset]
//! where preset is one of: synth, organ, saw_synth

mod keys;

use std::time::Duration;

use color_eyre::eyre::eyre;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use keywave::io::output::AudioOutput;
use keywave::synth::{AudioConfig, Voice};
use keywave::voices;
use tracing::info;

/// Longest tail we will render after a release before giving up on a graph
/// that never reports ended.
const MAX_RELEASE_SECONDS: f32 = 5.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let preset = std::env::args().nth(1).unwrap_or_else(|| "saw_synth".into());
    if !voices::PRESET_NAMES.contains(&preset.as_str()) {
        return Err(eyre!(
            "unknown preset '{preset}' (available: {})",
            voices::PRESET_NAMES.join(", ")
        ));
    }

    let defaults = AudioConfig::default();
    let mut output = AudioOutput::open(defaults.buffer_frames)?;
    let config = AudioConfig {
        sample_rate: output.sample_rate(),
        ..defaults
    };

    info!(preset, sample_rate = config.sample_rate, "keywave ready");

    let _guard = RawModeGuard::enable()?;
    print!("keywave [{preset}]\r\n");
    print!("  w e   t y u   o\r\n");
    print!(" a s d f g h j k l   (q quits)\r\n");
    std::io::Write::flush(&mut std::io::stdout())?;

    loop {
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char(c) => {
                if let Some(frequency) = keys::key_to_frequency(c) {
                    play_note(&mut output, &preset, frequency, &config)?;
                }
            }
            _ => {}
        }
    }

    output.wait_until_drained();
    Ok(())
}

/// Trigger one note: build a fresh voice graph, draw it for the configured
/// duration, release it, and drain the tail until the graph reports ended.
fn play_note(
    output: &mut AudioOutput,
    preset: &str,
    frequency: f32,
    config: &AudioConfig,
) -> color_eyre::Result<()> {
    info!(frequency, "note on");

    let graph = voices::by_name(preset, frequency, config.sample_rate)?;
    let mut voice = Voice::new(graph, config.sample_rate);

    for _ in 0..config.note_frames() {
        output.push_frame(voice.next_frame());
    }

    voice.release();
    info!(frequency, "note off");

    let tail_cap = (MAX_RELEASE_SECONDS * config.sample_rate) as usize;
    for _ in 0..tail_cap {
        if voice.is_ended() {
            break;
        }
        output.push_frame(voice.next_frame());
    }

    Ok(())
}

/// Puts the terminal in raw mode and restores it on drop, so a panic or
/// early return cannot leave the shell unusable.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> color_eyre::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
