//! codetriad — a collaborative three-agent development pipeline.
//!
//! Three role-specialized agents share one inference backend: a requirements
//! analyst interviews the operator until it can emit an SRS document, a
//! coder turns the SRS into a program, and a tester critiques the program
//! against the SRS until it passes or the revision budget runs out. The
//! [`pipeline::Pipeline`] orchestrator sequences the phases and accounts
//! token usage per role.

pub mod agent;
pub mod config;
pub mod console;
pub mod conversation;
pub mod llm;
pub mod pipeline;
