pub mod models;
pub mod routes;
pub mod views;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use deskbooker_core::{BookingProcessor, DeskRepository};
use deskbooker_kernel::{InitCtx, Module};
use serde_json::json;

use crate::utils;

/// Desk booking form, confirmation page and JSON booking API
pub struct DesksModule {
    state: routes::DesksState,
}

impl DesksModule {
    pub fn new(processor: Arc<dyn BookingProcessor>, inventory: Arc<dyn DeskRepository>) -> Self {
        Self {
            state: routes::DesksState {
                processor,
                inventory,
            },
        }
    }
}

#[async_trait]
impl Module for DesksModule {
    fn name(&self) -> &'static str {
        "desks"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            prefix = %utils::log_prefix(self.name()),
            environment = ?ctx.settings.environment,
            "desks module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/book": {
                    "get": {
                        "summary": "Booking form",
                        "tags": ["Desks"],
                        "responses": {
                            "200": {
                                "description": "HTML booking form",
                                "content": { "text/html": { "schema": { "type": "string" } } }
                            }
                        }
                    },
                    "post": {
                        "summary": "Submit the booking form",
                        "tags": ["Desks"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/x-www-form-urlencoded": {
                                    "schema": { "$ref": "#/components/schemas/BookingForm" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Form re-rendered with validation errors",
                                "content": { "text/html": { "schema": { "type": "string" } } }
                            },
                            "303": { "description": "Booked; redirect to the confirmation page" },
                            "409": {
                                "description": "Desk taken concurrently",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/confirmation": {
                    "get": {
                        "summary": "Booking confirmation page",
                        "tags": ["Desks"],
                        "parameters": [
                            { "name": "booking_id", "in": "query", "required": true, "schema": { "type": "integer" } },
                            { "name": "first_name", "in": "query", "required": true, "schema": { "type": "string" } },
                            { "name": "date", "in": "query", "required": true, "schema": { "type": "string", "format": "date" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "HTML confirmation",
                                "content": { "text/html": { "schema": { "type": "string" } } }
                            }
                        }
                    }
                },
                "/bookings": {
                    "post": {
                        "summary": "Book the first free desk",
                        "tags": ["Desks"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookingForm" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Desk booked",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/BookingResult" }
                                    }
                                }
                            },
                            "409": {
                                "description": "No desk available",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            },
                            "422": {
                                "description": "Validation error",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/available": {
                    "get": {
                        "summary": "Desks free on a day",
                        "tags": ["Desks"],
                        "parameters": [
                            { "name": "date", "in": "query", "required": true, "schema": { "type": "string", "format": "date" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Free desks in booking order",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Availability" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Desks health check",
                        "tags": ["Desks"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": { "text/plain": { "schema": { "type": "string" } } }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "BookingForm": {
                        "type": "object",
                        "properties": {
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string", "format": "email" },
                            "date": { "type": "string", "format": "date" }
                        },
                        "required": ["first_name", "last_name", "email", "date"]
                    },
                    "BookingResult": {
                        "type": "object",
                        "properties": {
                            "code": { "type": "string", "enum": ["success", "no_desks_available"] },
                            "booking_id": { "type": "integer", "description": "Present on success" },
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "email": { "type": "string" },
                            "date": { "type": "string", "format": "date" }
                        },
                        "required": ["code", "first_name", "last_name", "email", "date"]
                    },
                    "Availability": {
                        "type": "object",
                        "properties": {
                            "date": { "type": "string", "format": "date" },
                            "desks": {
                                "type": "array",
                                "items": {
                                    "type": "object",
                                    "properties": { "id": { "type": "integer" } },
                                    "required": ["id"]
                                }
                            }
                        },
                        "required": ["date", "desks"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "desks module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "desks module stopped");
        Ok(())
    }
}

/// Create a new instance of the desks module
pub fn create_module(
    processor: Arc<dyn BookingProcessor>,
    inventory: Arc<dyn DeskRepository>,
) -> Arc<dyn Module> {
    Arc::new(DesksModule::new(processor, inventory))
}
