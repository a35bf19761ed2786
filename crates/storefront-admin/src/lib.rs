// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin gate and validated admin actions.

pub mod actions;
pub mod gate;

pub use actions::AdminActions;
pub use gate::AdminGate;
