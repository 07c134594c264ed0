use std::io::{self, Write};

/// Success-cue playback. Fire-and-forget: implementations must return
/// promptly and must not surface errors to the caller, so a broken cue can
/// never stall or corrupt a quiz round.
pub trait FeedbackCue {
    fn play_success_cue(&mut self);
}

/// Rings the terminal bell. The stdout lock is scoped to the call, so the
/// playback handle is released before the round state advances.
pub struct TerminalBell;

impl FeedbackCue for TerminalBell {
    fn play_success_cue(&mut self) {
        let mut out = io::stdout().lock();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// No-op cue for `--quiet` runs.
pub struct SilentCue;

impl FeedbackCue for SilentCue {
    fn play_success_cue(&mut self) {}
}
