//! Mountable views: the shell's own home page and the micro-apps it hosts.
//!
//! A component is built from a [`ComponentFactory`], the value a remote
//! loader hands back once it has resolved an exposed module. The factories
//! for every component linked into this binary are listed in [`catalog`].

pub mod home;
pub mod input;
pub mod sticky_notes;
pub mod tea_tracker;

use crate::config::TeaTrackerConfig;
use crate::model::StateError;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use std::fmt;

pub trait Component {
    fn title(&self) -> &str;

    /// Draw into `area`. `focused` is true when keyboard input goes to the outlet.
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool);

    /// Returns `true` when the key was consumed and the view needs a redraw.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// Short key help shown in the status bar.
    fn key_hints(&self) -> &'static str {
        ""
    }
}

/// Settings handed to a component when it is constructed.
#[derive(Debug, Clone, Default)]
pub struct MountContext {
    pub tea_tracker: TeaTrackerConfig,
}

pub type Construct = fn(&MountContext) -> Result<Box<dyn Component>, StateError>;

/// A named component constructor.
#[derive(Clone, Copy)]
pub struct ComponentFactory {
    id: &'static str,
    name: &'static str,
    construct: Construct,
}

impl ComponentFactory {
    pub const fn new(id: &'static str, name: &'static str, construct: Construct) -> Self {
        Self {
            id,
            name,
            construct,
        }
    }

    /// Catalog key, `<bundle>/<module>`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn construct(&self, ctx: &MountContext) -> Result<Box<dyn Component>, StateError> {
        (self.construct)(ctx)
    }
}

impl fmt::Debug for ComponentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl PartialEq for ComponentFactory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ComponentFactory {}

const CATALOG: &[ComponentFactory] = &[tea_tracker::FACTORY, sticky_notes::FACTORY];

/// Every remotely exposable component linked into the binary.
pub fn catalog() -> &'static [ComponentFactory] {
    CATALOG
}

pub fn lookup(id: &str) -> Option<ComponentFactory> {
    catalog().iter().find(|f| f.id == id).copied()
}
