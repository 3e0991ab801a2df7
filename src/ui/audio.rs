//! Sound playback for move and capture cues.
//!
//! The output stream lives on its own OS thread; the UI sends cues to it
//! over a channel. The player is installed as a GPUI global.

use std::io::Cursor;
use std::sync::mpsc::{self, Sender};
use std::thread;

use anyhow::{Context, Result};
use gpui::{AssetSource, Global};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::models::SoundCue;
use crate::ui::FileAssets;

pub struct SoundPlayer {
    cue_sender: Sender<SoundCue>,
}

impl Global for SoundPlayer {}

impl SoundPlayer {
    /// Load both cue files and start the playback thread
    pub fn spawn(assets: &FileAssets) -> Result<Self> {
        let move_wav = load_cue(assets, SoundCue::Move)?;
        let capture_wav = load_cue(assets, SoundCue::Capture)?;
        let (cue_sender, cue_receiver) = mpsc::channel::<SoundCue>();

        thread::Builder::new()
            .name("sound".into())
            .spawn(move || {
                // The stream must stay alive for as long as anything plays
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(output) => output,
                    Err(err) => {
                        tracing::warn!("no audio output, sound disabled: {err}");
                        return;
                    }
                };
                for cue in cue_receiver {
                    let data = match cue {
                        SoundCue::Move => &move_wav,
                        SoundCue::Capture => &capture_wav,
                    };
                    if let Err(err) = play(&handle, data.clone()) {
                        tracing::warn!(asset = cue.asset_path(), "failed to play: {err:#}");
                    }
                }
            })
            .context("failed to start the sound thread")?;

        Ok(Self { cue_sender })
    }

    pub fn play(&self, cue: SoundCue) {
        if self.cue_sender.send(cue).is_err() {
            tracing::debug!("sound thread has stopped");
        }
    }
}

fn load_cue(assets: &FileAssets, cue: SoundCue) -> Result<Vec<u8>> {
    let data = assets
        .load(cue.asset_path())?
        .with_context(|| format!("missing sound asset {}", cue.asset_path()))?;
    Ok(data.into_owned())
}

fn play(handle: &OutputStreamHandle, data: Vec<u8>) -> Result<()> {
    let source = Decoder::new(Cursor::new(data)).context("not a playable sound file")?;
    let sink = Sink::try_new(handle)?;
    sink.append(source);
    sink.detach();
    Ok(())
}
