//! iTask - a terminal to-do list with deadlines
//!
//! This library provides a keyboard and mouse driven task list with an
//! optional deadline per task, picked with a month calendar and an analog
//! clock dial. Tasks are persisted after every change in a small key-value
//! store backed by SQLite, and the interface is built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Key-value persistence for the task snapshot
//! * [`tasks`] - The task list and its write-through store
//! * [`pickers`] - Calendar, clock and deadline picker state
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Calendar and clock pickers used to choose a deadline
pub mod pickers;

/// Key-value storage backends
pub mod storage;

/// Task model and the persisted task list
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use tasks::{Task, TaskId, TaskStore};
