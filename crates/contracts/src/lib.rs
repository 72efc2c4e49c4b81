//! Общие DTO-контракты админ-панели.
//!
//! Типы в этом crate описывают записи и формы ресурсов бэкенда в том виде,
//! в котором они ходят по проводу. Никакой логики запросов здесь нет:
//! она живёт в crate `client`.

pub mod domain;
pub mod enums;
pub mod system;
