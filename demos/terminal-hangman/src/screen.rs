//! Screens and the navigation stack.

use std::fmt;

/// Every screen the front-end can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NameEntry,
    MainMenu,
    PvcGame,
    /// Asks for the opponent's name before a PvP match.
    PvpSetup,
    /// The word-setter types the secret word for the next PvP round.
    PvpWordSetup,
    PvpGame,
    Instructions,
    ExitConfirmation,
    /// Final result after "finish the game".
    Summary,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NameEntry => "NameEntry",
            Self::MainMenu => "MainMenu",
            Self::PvcGame => "PvCGame",
            Self::PvpSetup => "PvPGameSetup",
            Self::PvpWordSetup => "PvPWordSetup",
            Self::PvpGame => "PvPGame",
            Self::Instructions => "Instructions",
            Self::ExitConfirmation => "ExitConfirmation",
            Self::Summary => "Summary",
        };
        f.write_str(name)
    }
}

/// What a screen asks the router to do once it's done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Show the same screen again.
    Stay,
    /// Open `Screen` on top of the current one.
    Push(Screen),
    /// Swap the current screen for another.
    Replace(Screen),
    /// Return to the previous screen. No-op on the root.
    Back,
    /// Drop everything and show the main menu.
    Home,
    /// Leave the application.
    Quit,
}

/// A stack of screens. The top is what's shown.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<Screen>,
}

impl Router {
    pub fn new(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    /// The screen on top, or `None` once the app has quit.
    pub fn current(&self) -> Option<Screen> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, nav: Nav) {
        match nav {
            Nav::Stay => {}
            Nav::Push(screen) => self.stack.push(screen),
            Nav::Replace(screen) => {
                self.stack.pop();
                self.stack.push(screen);
            }
            Nav::Back => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Nav::Home => {
                self.stack.clear();
                self.stack.push(Screen::MainMenu);
            }
            Nav::Quit => self.stack.clear(),
        }
    }
}
