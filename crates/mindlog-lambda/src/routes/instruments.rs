use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use mindlog_core::models::assessment::InstrumentKind;
use mindlog_instruments::scoring::{Question, ResponseOption, SeverityThreshold};
use mindlog_instruments::{Instrument, all_instruments, get_instrument, get_instrument_by_test_id};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    test_id: u32,
    id: String,
    name: String,
    test_type: InstrumentKind,
    description: String,
    question_count: usize,
    max_score: u32,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    test_id: u32,
    id: String,
    name: String,
    test_type: InstrumentKind,
    description: String,
    max_score: u32,
    questions: Vec<Question>,
    response_options: Vec<ResponseOption>,
    thresholds: Vec<SeverityThreshold>,
}

fn summary(instrument: &dyn Instrument) -> InstrumentSummary {
    InstrumentSummary {
        test_id: instrument.test_id(),
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        test_type: instrument.kind(),
        description: instrument.description().to_string(),
        question_count: instrument.questions().len(),
        max_score: instrument.max_score(),
    }
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> =
        all_instruments().iter().map(|i| summary(i.as_ref())).collect();
    Json(instruments)
}

/// Accepts either the numeric test id or the slug.
pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = match id.parse::<u32>() {
        Ok(test_id) => get_instrument_by_test_id(test_id),
        Err(_) => get_instrument(&id),
    }
    .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        test_id: instrument.test_id(),
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        test_type: instrument.kind(),
        description: instrument.description().to_string(),
        max_score: instrument.max_score(),
        questions: instrument.questions().to_vec(),
        response_options: instrument.response_options().to_vec(),
        thresholds: instrument.thresholds().to_vec(),
    }))
}
