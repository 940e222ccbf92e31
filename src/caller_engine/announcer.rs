//! Optional announcement side channel.
//!
//! The engine hands every successful call to an [`Announcer`] without waiting
//! on it or inspecting anything it does. Implementations own their failures.

use std::io::Write;

use crate::caller_engine::models::Letter;

/// Receives one announcement per successful call.
pub trait Announcer {
    fn announce(&mut self, letter: Letter, number: u8);
}

/// The phrase a caller speaks, e.g. `"B ... 12"`.
pub fn spoken_phrase(letter: Letter, number: u8) -> String {
    format!("{letter} ... {number}")
}

/// An injected announcer plus the user's on/off switch. Starts disabled.
pub struct Announcement {
    announcer: Box<dyn Announcer>,
    enabled: bool,
}

impl Announcement {
    pub fn new(announcer: Box<dyn Announcer>) -> Self {
        Announcement { announcer, enabled: false }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Flip the switch and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Forward to the announcer when enabled; no-op otherwise.
    pub fn announce(&mut self, letter: Letter, number: u8) {
        if self.enabled {
            self.announcer.announce(letter, number);
        }
    }
}

impl std::fmt::Debug for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Announcement").field("enabled", &self.enabled).finish_non_exhaustive()
    }
}

/// Writes each phrase as a line to `W` (stdout in the CLI).
pub struct WriterAnnouncer<W: Write> {
    out: W,
}

impl<W: Write> WriterAnnouncer<W> {
    pub fn new(out: W) -> Self {
        WriterAnnouncer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Announcer for WriterAnnouncer<W> {
    fn announce(&mut self, letter: Letter, number: u8) {
        let phrase = spoken_phrase(letter, number);
        if let Err(err) = writeln!(self.out, "{phrase}").and_then(|_| self.out.flush()) {
            tracing::warn!(%letter, number, error = %err, "announcement dropped");
        }
    }
}

/// Emits each phrase as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, letter: Letter, number: u8) {
        tracing::info!(%letter, number, phrase = %spoken_phrase(letter, number), "announce");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn phrase_matches_caller_cadence() {
        assert_eq!(spoken_phrase(Letter::B, 12), "B ... 12");
        assert_eq!(spoken_phrase(Letter::O, 75), "O ... 75");
    }

    #[test]
    fn writer_announcer_writes_one_line_per_call() {
        let mut a = WriterAnnouncer::new(Vec::new());
        a.announce(Letter::N, 33);
        a.announce(Letter::G, 50);
        let text = String::from_utf8(a.into_inner()).unwrap();
        assert_eq!(text, "N ... 33\nG ... 50\n");
    }

    #[test]
    fn writer_errors_are_swallowed() {
        let mut a = WriterAnnouncer::new(BrokenPipe);
        a.announce(Letter::I, 20);
    }

    #[test]
    fn announcement_is_off_until_toggled() {
        let mut a = Announcement::new(Box::new(LogAnnouncer));
        assert!(!a.is_enabled());
        assert!(a.toggle());
        assert!(!a.toggle());
        assert!(Announcement::new(Box::new(LogAnnouncer)).enabled(true).is_enabled());
    }
}
