//! Workspace-level integration tests for fibdev. See `tests/`.
