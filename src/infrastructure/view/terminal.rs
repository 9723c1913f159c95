use super::{StatusTone, StudioView};
use crate::domain::scope::{Action, Player, Scope};
use crate::domain::voice::audio::{decode_data_uri, extension_for_mime};
use chrono::Local;
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 30;

/// Renders flows on stderr and saves every player source as an audio file.
///
/// View updates arrive while a flow settles, so player sources are only
/// queued there; [`save_pending`](Self::save_pending) writes them out.
pub struct TerminalView {
    output_dir: PathBuf,
    bar_open: Mutex<bool>,
    pending: Mutex<Vec<(Player, String)>>,
    saved: Mutex<Vec<PathBuf>>,
}

impl TerminalView {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            bar_open: Mutex::new(false),
            pending: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Files written so far, oldest first
    pub fn saved_files(&self) -> Vec<PathBuf> {
        self.saved.lock().clone()
    }

    /// Write every queued player source to the output directory
    pub async fn save_pending(&self) -> Vec<PathBuf> {
        let pending = std::mem::take(&mut *self.pending.lock());
        let mut written = Vec::with_capacity(pending.len());

        for (player, source) in pending {
            match self.save_audio(player, &source).await {
                Ok(path) => {
                    tracing::info!(player = %player, path = %display_path(&path), "Audio saved");
                    self.print_line(&format!("[{}] audio: {}", player, display_path(&path)));
                    written.push(path);
                }
                Err(e) => {
                    tracing::error!(player = %player, error = %e, "Failed to save audio");
                }
            }
        }

        self.saved.lock().extend(written.iter().cloned());
        written
    }

    fn print_line(&self, line: &str) {
        let mut bar_open = self.bar_open.lock();
        let mut stderr = std::io::stderr().lock();
        if *bar_open {
            let _ = writeln!(stderr);
            *bar_open = false;
        }
        let _ = writeln!(stderr, "{}", line);
    }

    async fn save_audio(
        &self,
        player: Player,
        source: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        let audio = decode_data_uri(source)?;
        let file_name = format!(
            "{}-{}.{}",
            player,
            Local::now().format("%Y%m%d-%H%M%S%.3f"),
            extension_for_mime(&audio.mime_type)
        );
        let path = self.output_dir.join(file_name);

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(&path, &audio.bytes).await?;
        Ok(path)
    }
}

fn render_bar(percent: u8) -> String {
    let filled = BAR_WIDTH * usize::from(percent.min(100)) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

impl StudioView for TerminalView {
    fn set_status(&self, scope: Scope, message: &str, tone: StatusTone) {
        let marker = match tone {
            StatusTone::Info => "..",
            StatusTone::Success => "ok",
            StatusTone::Error => "!!",
        };
        self.print_line(&format!("[{}] {} {}", scope, marker, message));
    }

    fn set_progress(&self, scope: Scope, percent: u8) {
        let mut bar_open = self.bar_open.lock();
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "\r[{}] [{}] {:>3}%", scope, render_bar(percent), percent);
        let _ = stderr.flush();
        *bar_open = true;
    }

    fn set_action_enabled(&self, action: Action, enabled: bool) {
        tracing::debug!(action = %action, enabled, "Action control toggled");
    }

    fn set_voice_name(&self, scope: Scope, voice: &str) {
        self.print_line(&format!("[{}] voice: {}", scope, voice));
    }

    fn set_audio_source(&self, player: Player, source: Option<&str>) {
        let mut pending = self.pending.lock();
        pending.retain(|(p, _)| *p != player);

        match source {
            Some(source) => pending.push((player, source.to_string())),
            None => tracing::debug!(player = %player, "Player cleared"),
        }
    }
}
