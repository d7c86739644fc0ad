//! Dynamic section numbering
//!
//! Sections are conditionally skipped, so ordinals cannot be hardcoded.
//! Renderers declare a plan of `{include, write}` entries in canonical order
//! and a running counter assigns numbers only to included entries. Numbering
//! is therefore order-stable (canonical order is fixed in the plan) and
//! gap-free (skipped entries never consume a number).

/// Running top-level section counter
#[derive(Debug)]
pub struct SectionCounter {
    next: u32,
}

impl SectionCounter {
    /// Counter starting at section 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Take the next section number
    pub fn next(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }

    /// The number the next included section will receive
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for SectionCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry in a declarative section plan
pub struct PlannedSection<'a> {
    include: bool,
    write: Box<dyn FnOnce(u32, &mut String) + 'a>,
}

impl<'a> PlannedSection<'a> {
    /// Conditionally included section
    pub fn when(include: bool, write: impl FnOnce(u32, &mut String) + 'a) -> Self {
        Self {
            include,
            write: Box::new(write),
        }
    }

    /// Always-included section
    pub fn always(write: impl FnOnce(u32, &mut String) + 'a) -> Self {
        Self::when(true, write)
    }
}

/// Write every included section of the plan, numbering sequentially
pub fn write_sections(out: &mut String, counter: &mut SectionCounter, plan: Vec<PlannedSection>) {
    for section in plan {
        if section.include {
            (section.write)(counter.next(), out);
        }
    }
}
