//! Grammar productions, split by syntactic category.
//!
//! Every production starts with the cursor's `current` token on its first
//! token and leaves `current` on its last token. The caller advances past it.

mod expr;
mod stmt;
