// Utility Module
// File and prompt plumbing around the cipher core

pub mod file_ops;
