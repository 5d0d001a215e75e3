//! Integration tests for news-digest
//!
//! These tests run the extractor end-to-end over realistic page layouts
//! and drive the pipeline with stub collaborators.

mod pipeline_flow;
mod real_world_articles;
