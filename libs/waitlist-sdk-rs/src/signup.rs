//! Client-side signup state machine.

use std::sync::Arc;

use waitlist_types::{Personality, SubmitEntryRequest};

use crate::{
    api::WaitlistApi,
    availability::NameAvailability,
    error::FlowError,
};

/// Steps of the signup flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    Name,
    Personality,
    Signup,
    Success,
}

impl SignupStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupStep::Name => "name",
            SignupStep::Personality => "personality",
            SignupStep::Signup => "signup",
            SignupStep::Success => "success",
        }
    }
}

impl std::fmt::Display for SignupStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Name → personality → signup → success.
///
/// Only explicit `back` moves backwards. Every failed operation leaves the
/// step and the entered values untouched so the user can retry. Nothing here
/// survives a restart.
pub struct SignupFlow {
    api: Arc<dyn WaitlistApi>,
    availability: Arc<dyn NameAvailability>,
    step: SignupStep,
    assistant_name: String,
    personality: Personality,
    email: String,
    phone: String,
    waitlist_count: usize,
}

impl SignupFlow {
    pub fn new(api: Arc<dyn WaitlistApi>, availability: Arc<dyn NameAvailability>) -> Self {
        Self {
            api,
            availability,
            step: SignupStep::Name,
            assistant_name: String::new(),
            personality: Personality::default(),
            email: String::new(),
            phone: String::new(),
            waitlist_count: 0,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Last known number of signups.
    pub fn waitlist_count(&self) -> usize {
        self.waitlist_count
    }

    /// Fetch the running count. A failure keeps the previous value.
    pub async fn load_count(&mut self) -> usize {
        match self.api.count().await {
            Ok(count) => self.waitlist_count = count,
            Err(err) => tracing::warn!(error = %err, "Failed to fetch waitlist count"),
        }
        self.waitlist_count
    }

    pub fn set_assistant_name(&mut self, name: impl Into<String>) {
        self.assistant_name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// name → personality, if the name is non-empty and reported available.
    pub async fn check_name(&mut self) -> Result<(), FlowError> {
        self.require(SignupStep::Name, "check a name")?;

        let name = self.assistant_name.trim();
        if name.is_empty() {
            return Err(FlowError::MissingName);
        }

        if !self.availability.is_available(name).await {
            return Err(FlowError::NameUnavailable(name.to_string()));
        }

        self.step = SignupStep::Personality;
        Ok(())
    }

    pub fn choose_personality(&mut self, personality: Personality) -> Result<(), FlowError> {
        self.require(SignupStep::Personality, "choose a personality")?;
        self.personality = personality;
        Ok(())
    }

    /// personality → signup.
    pub fn continue_to_signup(&mut self) -> Result<(), FlowError> {
        self.require(SignupStep::Personality, "continue to signup")?;
        self.step = SignupStep::Signup;
        Ok(())
    }

    /// signup → personality, personality → name.
    pub fn back(&mut self) -> Result<SignupStep, FlowError> {
        self.step = match self.step {
            SignupStep::Signup => SignupStep::Personality,
            SignupStep::Personality => SignupStep::Name,
            from => {
                return Err(FlowError::InvalidTransition {
                    from: from.as_str(),
                    action: "go back",
                });
            }
        };
        Ok(self.step)
    }

    /// signup → success. Returns the new waitlist count.
    pub async fn submit(&mut self) -> Result<usize, FlowError> {
        self.require(SignupStep::Signup, "submit")?;

        if self.email.trim().is_empty() {
            return Err(FlowError::MissingEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(FlowError::MissingPhone);
        }

        let request = SubmitEntryRequest {
            assistant_name: self.assistant_name.clone(),
            personality: self.personality,
            email: self.email.clone(),
            phone: self.phone.clone(),
        };

        let response = self.api.submit(&request).await?;

        self.waitlist_count = response.count;
        self.step = SignupStep::Success;
        Ok(response.count)
    }

    fn require(&self, expected: SignupStep, action: &'static str) -> Result<(), FlowError> {
        if self.step != expected {
            return Err(FlowError::InvalidTransition {
                from: self.step.as_str(),
                action,
            });
        }
        Ok(())
    }
}
