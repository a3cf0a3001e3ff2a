#![expect(missing_docs, clippy::missing_docs_in_private_items)]

pub mod admins;
pub mod internships;
