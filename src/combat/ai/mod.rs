//! Combat domain: AI system modules for the boss.

pub(crate) mod boss;

pub(crate) use boss::update_boss_ai;
