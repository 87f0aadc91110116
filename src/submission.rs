use std::{collections::HashSet, fmt::Display, time::Duration};

use parking_lot::Mutex;
use tracing::field::{display, Empty};
use uuid::Uuid;

use crate::{
    domain::{ContactForm, FormInput, ValidationResult},
    relay_client::{RelayClient, SubmissionOutcome},
};

pub const SUCCESS_NOTICE: &str = "Thank you! Your message has been sent successfully.";
pub const BUSY_NOTICE: &str = "Your previous message is still being sent. Please wait.";

/// 单次提交的状态
///
/// `Idle -> Validating -> {Idle(校验错误) | Submitting} -> Idle(结果提示)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
}

impl Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// 提交结果提示，显示一段时间后自动消失
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub dismiss_after_ms: u64,
}

impl Notice {
    pub fn success(text: impl Into<String>, dismiss_after_ms: u64) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            dismiss_after_ms,
        }
    }

    pub fn error(text: impl Into<String>, dismiss_after_ms: u64) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            dismiss_after_ms,
        }
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

#[derive(Debug)]
pub enum HandleOutcome {
    /// 存在校验错误，未发送请求
    Invalid(ValidationResult),
    /// 该访客的上一次提交尚未完成
    Busy(Notice),
    Completed {
        outcome: SubmissionOutcome,
        notice: Notice,
    },
}

impl HandleOutcome {
    /// 成功后调用方应清空表单
    pub fn should_clear_form(&self) -> bool {
        matches!(
            self,
            HandleOutcome::Completed {
                outcome: SubmissionOutcome::Success,
                ..
            }
        )
    }
}

/// 提交锁，对应每个访客请求期间禁用的提交按钮
#[derive(Debug, Default)]
pub struct SubmitLatch(Mutex<HashSet<Uuid>>);

impl SubmitLatch {
    pub fn try_acquire(&self, visitor_id: Uuid) -> Option<SubmitGuard<'_>> {
        self.0
            .lock()
            .insert(visitor_id)
            .then(|| SubmitGuard {
                latch: self,
                visitor_id,
            })
    }

    #[cfg(test)]
    fn is_held(&self, visitor_id: Uuid) -> bool {
        self.0.lock().contains(&visitor_id)
    }
}

/// drop时释放该访客的提交锁，无论请求结果如何
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    latch: &'a SubmitLatch,
    visitor_id: Uuid,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.latch.0.lock().remove(&self.visitor_id);
    }
}

pub struct ContactHandler {
    relay_client: RelayClient,
    latch: SubmitLatch,
    notice_dismiss_ms: u64,
}

impl ContactHandler {
    pub fn new(relay_client: RelayClient, notice_dismiss_ms: u64) -> Self {
        Self {
            relay_client,
            latch: SubmitLatch::default(),
            notice_dismiss_ms,
        }
    }

    pub fn notice_dismiss_ms(&self) -> u64 {
        self.notice_dismiss_ms
    }

    #[tracing::instrument(
        name = "handling contact submission",
        skip_all,
        fields(
            submission_id = %Uuid::new_v4(),
            visitor_id = %visitor_id,
            state = %SubmissionState::Idle,
            outcome = Empty,
        )
    )]
    pub async fn handle(&self, visitor_id: Uuid, input: &FormInput) -> HandleOutcome {
        transition(SubmissionState::Validating);
        let form = match ContactForm::try_from(input) {
            Ok(form) => form,
            Err(result) => {
                transition(SubmissionState::Idle);
                tracing::info!(
                    invalid_fields = result.field_errors().count(),
                    "contact form failed validation."
                );
                return HandleOutcome::Invalid(result);
            }
        };

        let Some(_guard) = self.latch.try_acquire(visitor_id) else {
            transition(SubmissionState::Idle);
            tracing::warn!("this visitor already has a submission in flight.");
            return HandleOutcome::Busy(Notice::error(BUSY_NOTICE, self.notice_dismiss_ms));
        };
        transition(SubmissionState::Submitting);

        let outcome = self.relay_client.submit(&form).await;
        transition(SubmissionState::Idle);

        let notice = match &outcome {
            SubmissionOutcome::Success => {
                tracing::Span::current().record("outcome", "success");
                Notice::success(SUCCESS_NOTICE, self.notice_dismiss_ms)
            }
            SubmissionOutcome::Failure(reason) => {
                tracing::Span::current().record("outcome", "failure");
                Notice::error(reason.as_str(), self.notice_dismiss_ms)
            }
        };

        HandleOutcome::Completed { outcome, notice }
    }
}

fn transition(state: SubmissionState) {
    tracing::Span::current().record("state", display(state));
    tracing::debug!(%state, "submission state changed.");
}
