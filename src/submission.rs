//! Submission controller.
//!
//! Drives one form submission: validate, normalize, ask the service, and
//! record the result. At most one submission is pending per controller;
//! a second `submit` while one is in flight fails with
//! [`AnalyzerError::Busy`] instead of queueing.

use log::{debug, info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::client::RecipeService;
use crate::error::AnalyzerError;
use crate::model::Recipe;
use crate::normalizer;

/// How a settled submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The service answered; possibly with zero suggestions
    Recipes(Vec<Recipe>),
    /// User-facing message for a validation or service failure
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight; submitting again is refused
    Pending,
    /// The last submission finished
    Settled(Outcome),
}

#[derive(Debug, Default)]
struct Inner {
    state: SubmissionState,
    parsed: Vec<String>,
}

pub struct SubmissionController<S> {
    service: S,
    inner: Mutex<Inner>,
}

impl<S: RecipeService> SubmissionController<S> {
    pub fn new(service: S) -> Self {
        SubmissionController {
            service,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Run a full submission for `raw` input.
    ///
    /// Validation failures settle immediately without touching the network.
    /// Whatever happens after the request starts, the controller leaves
    /// [`SubmissionState::Pending`] when this future completes or is dropped.
    pub async fn submit(&self, raw: &str) -> Result<Vec<Recipe>, AnalyzerError> {
        let pending = self.begin(raw)?;
        let result = self.service.analyze(pending.ingredients()).await;

        match &result {
            Ok(recipes) => {
                info!("Received {} recipe suggestions", recipes.len());
                pending.settle(Outcome::Recipes(recipes.clone()));
            }
            Err(e) => {
                warn!("Recipe analysis failed: {}", e);
                pending.settle(Outcome::Failed(e.user_message()));
            }
        }

        result
    }

    /// Validate and normalize, then move to `Pending`
    fn begin(&self, raw: &str) -> Result<PendingSubmission<'_>, AnalyzerError> {
        let mut inner = self.lock();
        if inner.state == SubmissionState::Pending {
            debug!("Rejecting submission while another is in flight");
            return Err(AnalyzerError::Busy);
        }

        let ingredients = match normalizer::normalize(raw) {
            Ok(ingredients) => ingredients,
            Err(e) => {
                inner.state = SubmissionState::Settled(Outcome::Failed(e.to_string()));
                return Err(e.into());
            }
        };

        inner.parsed = ingredients.clone();
        inner.state = SubmissionState::Pending;

        Ok(PendingSubmission {
            inner: &self.inner,
            ingredients,
            settled: false,
        })
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    /// Whether the submit control should be disabled
    pub fn is_pending(&self) -> bool {
        self.lock().state == SubmissionState::Pending
    }

    /// Ingredients sent by the most recent accepted submission
    pub fn parsed_ingredients(&self) -> Vec<String> {
        self.lock().parsed.clone()
    }

    /// Recipes to display; empty unless the last submission succeeded
    pub fn recipes(&self) -> Vec<Recipe> {
        match &self.lock().state {
            SubmissionState::Settled(Outcome::Recipes(recipes)) => recipes.clone(),
            _ => Vec::new(),
        }
    }

    /// Message to display if the last submission failed
    pub fn error_message(&self) -> Option<String> {
        match &self.lock().state {
            SubmissionState::Settled(Outcome::Failed(message)) => Some(message.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock_inner(&self.inner)
    }
}

fn lock_inner(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // State is always left consistent, so a poisoned lock is still usable
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the controller in `Pending` until settled or dropped
struct PendingSubmission<'a> {
    inner: &'a Mutex<Inner>,
    ingredients: Vec<String>,
    settled: bool,
}

impl PendingSubmission<'_> {
    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    fn settle(mut self, outcome: Outcome) {
        lock_inner(self.inner).state = SubmissionState::Settled(outcome);
        self.settled = true;
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Submission abandoned before the service answered");
            lock_inner(self.inner).state = SubmissionState::Idle;
        }
    }
}
