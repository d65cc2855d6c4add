// ABOUTME: Presentation state controller for the lega-slides application
// ABOUTME: Pure reducer over session state plus a host seam for fullscreen/audio requests

use crate::errors::Result;
use log::{info, warn};
use std::time::Duration;

/// Coarse session phase. Transitions are strictly forward: once the intro
/// has played there is no way back to the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    Intro,
    SlideDeck,
}

/// Mutable session state. Slide navigation clamps instead of erroring, so
/// every event is total: any event applied to any state yields a valid state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationState {
    pub phase: Phase,
    pub current: usize,
    pub total: usize,
    pub fullscreen: bool,
    pub audio_enabled: bool,
    pub playing: bool,
    pub volume: f32,
    pub elapsed: Duration,
}

/// Input to the reducer. Side effects (fullscreen, audio playback) happen
/// outside; only their confirmed outcomes enter as events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Start { audio: bool },
    IntroFinished,
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
    FullscreenChanged(bool),
    ToggleAudio,
    SetVolume(f32),
    Tick(Duration),
}

impl PresentationState {
    pub fn new(total: usize) -> Self {
        Self {
            phase: Phase::Welcome,
            current: 0,
            total,
            fullscreen: false,
            audio_enabled: false,
            playing: false,
            volume: 1.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Pure state transition. Navigation only acts once the deck is active;
    /// a duplicate `IntroFinished` is a no-op, so the intro completes at
    /// most once per session regardless of timer jitter.
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Start { audio } => {
                if self.phase == Phase::Welcome {
                    self.phase = Phase::Intro;
                    self.audio_enabled = audio;
                }
            }
            Event::IntroFinished => {
                if self.phase == Phase::Intro {
                    self.phase = Phase::SlideDeck;
                }
            }
            Event::Next => return self.navigate(self.current.saturating_add(1)),
            Event::Previous => return self.navigate(self.current.saturating_sub(1)),
            Event::First => return self.navigate(0),
            Event::Last => return self.navigate(self.total.saturating_sub(1)),
            Event::GoTo(index) => return self.navigate(index),
            Event::FullscreenChanged(on) => self.fullscreen = on,
            Event::ToggleAudio => self.audio_enabled = !self.audio_enabled,
            Event::SetVolume(v) => self.volume = v.max(0.0).min(1.0),
            Event::Tick(delta) => {
                if self.phase == Phase::SlideDeck {
                    self.elapsed += delta;
                }
            }
        }
        self
    }

    fn navigate(mut self, index: usize) -> Self {
        if self.phase == Phase::SlideDeck && self.total > 0 {
            self.current = index.min(self.total - 1);
        }
        self
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

/// Keyboard bindings of the presentation. Nothing outside this list is
/// mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    F11,
    KeyF,
}

impl Key {
    fn navigation_event(self) -> Option<Event> {
        match self {
            Key::ArrowRight | Key::Space => Some(Event::Next),
            Key::ArrowLeft => Some(Event::Previous),
            Key::Home => Some(Event::First),
            Key::End => Some(Event::Last),
            Key::F11 | Key::KeyF => None,
        }
    }
}

/// Seam to the hosting environment. Fullscreen and audio requests can be
/// rejected by the host (permissions, user-gesture requirements); rejections
/// are surfaced as errors and must leave the controller usable.
pub trait SessionHost {
    fn set_fullscreen(&mut self, on: bool) -> Result<()>;
    fn play_audio(&mut self) -> Result<()>;
    fn set_muted(&mut self, muted: bool) -> Result<()>;
    fn set_volume(&mut self, volume: f32) -> Result<()>;
}

/// Host backed by nothing but the log. Used by the CLI walkthrough, where a
/// terminal has no fullscreen or audio device to drive.
#[derive(Debug, Default)]
pub struct TerminalHost;

impl SessionHost for TerminalHost {
    fn set_fullscreen(&mut self, on: bool) -> Result<()> {
        info!("Fullscreen {}", if on { "entered" } else { "left" });
        Ok(())
    }

    fn play_audio(&mut self) -> Result<()> {
        info!("Audio playback started");
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) -> Result<()> {
        info!("Audio {}", if muted { "muted" } else { "unmuted" });
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<()> {
        info!("Volume set to {:.2}", volume);
        Ok(())
    }
}

/// Owns the session state and the host. Host rejections are logged and the
/// corresponding flag is left unchanged; the flag only flips on confirmed
/// success.
pub struct Controller<H: SessionHost> {
    state: PresentationState,
    host: H,
}

impl<H: SessionHost> Controller<H> {
    pub fn new(host: H, total: usize) -> Self {
        Self {
            state: PresentationState::new(total),
            host,
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    /// Leaves the welcome screen. A playback rejection (autoplay policy) is
    /// non-fatal: the deck starts silent.
    pub fn start(&mut self, audio: bool) {
        self.state = self.state.apply(Event::Start { audio });
        if audio {
            match self.host.play_audio() {
                Ok(()) => self.state.playing = true,
                Err(e) => warn!("Audio playback rejected: {}", e),
            }
        }
    }

    pub fn intro_finished(&mut self) {
        self.state = self.state.apply(Event::IntroFinished);
    }

    /// Applies a key press. Navigation keys feed the reducer; the fullscreen
    /// keys go through the host first.
    pub fn handle_key(&mut self, key: Key) {
        match key.navigation_event() {
            Some(event) => self.state = self.state.apply(event),
            None => self.toggle_fullscreen(),
        }
    }

    /// Direct jump, e.g. from a navigation dot. Same clamping as the keys.
    pub fn go_to_slide(&mut self, index: usize) {
        self.state = self.state.apply(Event::GoTo(index));
    }

    pub fn toggle_fullscreen(&mut self) {
        let target = !self.state.fullscreen;
        match self.host.set_fullscreen(target) {
            Ok(()) => self.state = self.state.apply(Event::FullscreenChanged(target)),
            Err(e) => warn!("Fullscreen request rejected: {}", e),
        }
    }

    /// Mute toggle. The host is asked first and the flag only flips on
    /// confirmed success. The stored volume is untouched, so unmuting
    /// restores the previous level.
    pub fn toggle_audio(&mut self) {
        let muted = self.state.audio_enabled;
        match self.host.set_muted(muted) {
            Ok(()) => self.state = self.state.apply(Event::ToggleAudio),
            Err(e) => warn!("Mute request rejected: {}", e),
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.state = self.state.apply(Event::SetVolume(volume));
        if let Err(e) = self.host.set_volume(self.state.volume) {
            warn!("Volume request rejected: {}", e);
        }
    }

    /// Called on the 1-second cadence with the measured wall-clock delta, so
    /// timer drift does not desync the counter.
    pub fn tick(&mut self, delta: Duration) {
        self.state = self.state.apply(Event::Tick(delta));
    }
}
