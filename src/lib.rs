//! Vehicles API
//!
//! Microservicio de listados de vehículos (`vehicles-api`) y su
//! microservicio de precios (`pricing-service`). Ambos binarios comparten
//! los módulos de esta librería.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod discovery;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;
