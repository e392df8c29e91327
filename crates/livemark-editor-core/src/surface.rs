//! Decoration surface abstraction.
//!
//! A surface is whatever paints attributes onto the edited text (a native
//! text view, a DOM, a terminal buffer). The engine only ever talks to it
//! through [`DecorationSurface`], in a strict clear-then-apply sequence.

use std::ops::Range;

use smol_str::SmolStr;

use crate::decoration::Decoration;

/// Rendering surface the engine decorates.
///
/// Passes against one surface must be serialized by the caller.
pub trait DecorationSurface {
    /// Remove every decoration a previous pass applied.
    ///
    /// Must leave other annotations on the buffer (spell-check, suggestions,
    /// composition underlines) untouched.
    fn clear_decorations(&mut self);

    /// Apply one decoration on top of those already applied this pass.
    fn apply_decoration(&mut self, decoration: &Decoration);
}

/// Clear the surface, then apply `decorations` in order.
pub fn apply_pass<S: DecorationSurface + ?Sized>(surface: &mut S, decorations: &[Decoration]) {
    surface.clear_decorations();
    for decoration in decorations {
        surface.apply_decoration(decoration);
    }
}

/// A non-engine annotation living on the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignAnnotation {
    pub range: Range<usize>,
    pub label: SmolStr,
}

/// In-memory surface that records what is applied.
///
/// Keeps engine decorations apart from foreign annotations so a clear only
/// drops the former. Useful for tests and headless hosts.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    decorations: Vec<Decoration>,
    foreign: Vec<ForeignAnnotation>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine decorations currently applied, in application order.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Add an annotation the engine does not own.
    pub fn annotate(&mut self, range: Range<usize>, label: impl Into<SmolStr>) {
        self.foreign.push(ForeignAnnotation {
            range,
            label: label.into(),
        });
    }

    pub fn foreign_annotations(&self) -> &[ForeignAnnotation] {
        &self.foreign
    }

    /// How many times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Whether any applied decoration hides `offset`.
    pub fn is_hidden_at(&self, offset: usize) -> bool {
        self.decorations
            .iter()
            .any(|d| d.is_hidden() && d.range.contains(&offset))
    }
}

impl DecorationSurface for RecordingSurface {
    fn clear_decorations(&mut self) {
        self.decorations.clear();
        self.clears += 1;
    }

    fn apply_decoration(&mut self, decoration: &Decoration) {
        self.decorations.push(decoration.clone());
    }
}
