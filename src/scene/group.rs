//! Object groups: named slots of scene objects driven through one update and
//! one render sweep per frame.
//!
//! Occupants are a closed tagged union rather than duck-typed objects, and
//! self-removal is snapshot-then-apply: an occupant asks for removal by
//! returning [`SlotAction::Remove`] from its update, the group collects those
//! requests during the sweep and applies them afterwards. Removal mid-sweep
//! therefore never skips or duplicates a sibling visit, and a removed
//! occupant is gone from the very next render.

use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::foundation::error::{ScenaError, ScenaResult};
use crate::particle::Particle;
use crate::render::surface::Surface;
use crate::scene::state::FrameState;
use crate::transform::Transform;
use crate::ui::Button;

/// What an occupant wants to happen to its slot after this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotAction {
    Keep,
    Remove,
}

/// A group occupant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SceneNode {
    Entity(Entity),
    Particle(Particle),
    Button(Button),
    Group(Group),
}

impl SceneNode {
    /// Whether this occupant participates in the update sweep.
    pub fn updatable(&self) -> bool {
        match self {
            Self::Entity(_) => false,
            Self::Particle(_) | Self::Button(_) | Self::Group(_) => true,
        }
    }

    /// Whether this occupant participates in the render sweep.
    pub fn renderable(&self) -> bool {
        match self {
            Self::Entity(_) | Self::Particle(_) | Self::Button(_) | Self::Group(_) => true,
        }
    }

    fn update(&mut self, state: &FrameState) -> SlotAction {
        match self {
            Self::Entity(_) => SlotAction::Keep,
            Self::Particle(p) => p.update(),
            Self::Button(b) => {
                b.update(state);
                SlotAction::Keep
            }
            Self::Group(g) => {
                g.update(state);
                SlotAction::Keep
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface, transform: &Transform) {
        match self {
            Self::Entity(e) => e.render(surface, transform),
            Self::Particle(p) => p.entity.render(surface, transform),
            Self::Button(b) => b.render(surface, transform),
            Self::Group(g) => g.render(surface, transform),
        }
    }
}

/// One occupied slot plus its traversal flags.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    pub node: SceneNode,
    /// Skip this occupant in update sweeps.
    #[serde(default)]
    pub paused: bool,
    /// Skip this occupant in render sweeps.
    #[serde(default)]
    pub hidden: bool,
}

impl Slot {
    fn new(node: SceneNode) -> Self {
        Self {
            node,
            paused: false,
            hidden: false,
        }
    }
}

/// A mapping from slot name to occupant, traversed in deterministic
/// (lexicographic) order. Index-style use goes through [`Group::push`],
/// which assigns zero-padded numeric names that sort in insertion order.
///
/// Groups do not offset the transform they pass down; only render nodes and
/// entities compose transforms.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Group {
    slots: BTreeMap<String, Slot>,
    #[serde(default)]
    next_index: u64,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupy the named slot, replacing any previous occupant.
    pub fn add(&mut self, name: impl Into<String>, node: SceneNode) -> String {
        let name = name.into();
        self.slots.insert(name.clone(), Slot::new(node));
        name
    }

    /// Occupy the next indexed slot and return its generated name.
    pub fn push(&mut self, node: SceneNode) -> String {
        let name = format!("{:012}", self.next_index);
        self.next_index += 1;
        self.add(name, node)
    }

    /// Vacate the slot, returning its occupant if there was one.
    pub fn remove(&mut self, name: &str) -> Option<SceneNode> {
        self.slots.remove(name).map(|slot| slot.node)
    }

    pub fn get(&self, name: &str) -> Option<&SceneNode> {
        self.slots.get(name).map(|slot| &slot.node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.slots.get_mut(name).map(|slot| &mut slot.node)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Exclude the slot from render sweeps.
    pub fn hide(&mut self, name: &str) -> ScenaResult<()> {
        self.flag(name, |slot| slot.hidden = true)
    }

    /// Re-include the slot in render sweeps.
    pub fn show(&mut self, name: &str) -> ScenaResult<()> {
        self.flag(name, |slot| slot.hidden = false)
    }

    /// Exclude the slot from update sweeps.
    pub fn pause(&mut self, name: &str) -> ScenaResult<()> {
        self.flag(name, |slot| slot.paused = true)
    }

    /// Re-include the slot in update sweeps.
    pub fn resume(&mut self, name: &str) -> ScenaResult<()> {
        self.flag(name, |slot| slot.paused = false)
    }

    fn flag(&mut self, name: &str, f: impl FnOnce(&mut Slot)) -> ScenaResult<()> {
        match self.slots.get_mut(name) {
            Some(slot) => {
                f(slot);
                Ok(())
            }
            None => Err(ScenaError::lookup(format!("no slot named '{name}'"))),
        }
    }

    /// Update sweep: visit every updatable, non-paused occupant exactly once,
    /// then apply the removals requested during the sweep.
    pub fn update(&mut self, state: &FrameState) {
        // Snapshot the slot set so structural requests cannot disturb the
        // traversal order.
        let names: Vec<String> = self.slots.keys().cloned().collect();
        let mut removals: Vec<String> = Vec::new();

        for name in names {
            let Some(slot) = self.slots.get_mut(&name) else {
                continue;
            };
            if slot.paused || !slot.node.updatable() {
                continue;
            }
            if slot.node.update(state) == SlotAction::Remove {
                removals.push(name);
            }
        }

        for name in removals {
            self.slots.remove(&name);
        }
    }

    /// Render sweep: every renderable, non-hidden occupant receives the
    /// group's inherited transform unchanged.
    pub fn render(&self, surface: &mut dyn Surface, transform: &Transform) {
        for slot in self.slots.values() {
            if slot.hidden || !slot.node.renderable() {
                continue;
            }
            slot.node.render(surface, transform);
        }
    }
}
