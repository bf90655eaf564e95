//! Custom actions for the order book.
//!
//! Beyond insert/read/patch/delete, staff views ask the book to evaluate an
//! order on the spot or to re-derive and store its cached label. Both run inside
//! the actor, so they see the row exactly as stored at that moment.

use crate::instruction::{DisplayStatus, InstructionLabel};

/// Order-specific operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Derives label and display status from the current fields without storing anything.
    Evaluate,
    /// Re-derives the label and stores it on the row.
    ///
    /// The book re-derives on every insert and patch, so for rows it wrote
    /// itself `previous` equals `current`. A difference shows up only for rows
    /// whose cached label was computed elsewhere, such as a snapshot exported
    /// by an older rule table and loaded back through [`Order`](crate::model::Order)'s
    /// serde form.
    RefreshInstruction,
}

/// Results from [`OrderAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    Evaluate {
        instruction: InstructionLabel,
        display_status: DisplayStatus,
    },
    RefreshInstruction {
        previous: Option<InstructionLabel>,
        current: InstructionLabel,
    },
}
