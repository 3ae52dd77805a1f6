//! Cross-module scenarios
