//! Catalog consistency checks.

mod consistency;
