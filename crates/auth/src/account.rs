//! Account aggregate for identity management (event-sourced).
//!
//! An account carries exactly one [`Role`], assigned at creation time.
//! Reassignment is an administrative action reserved for super admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutordesk_core::{Aggregate, AggregateRoot, DomainError, Event, UserId};

use crate::Role;

// ─────────────────────────────────────────────────────────────────────────────
// Account Status
// ─────────────────────────────────────────────────────────────────────────────

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountStatus {
    /// Account is active and can authenticate/transact.
    #[default]
    Active,
    /// Account is suspended and cannot authenticate.
    Suspended,
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Account Aggregate
// ─────────────────────────────────────────────────────────────────────────────

/// Account aggregate for identity management.
///
/// # Invariants
/// - An account holds exactly one role at any point in time.
/// - The role is assigned at creation and only reassigned by a super admin.
/// - Suspended accounts cannot have their role changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub status: AccountStatus,
    pub version: u64,
    pub created: bool,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: UserId::new(),
            email: String::new(),
            display_name: String::new(),
            role: Role::Student,
            status: AccountStatus::Active,
            version: 0,
            created: false,
        }
    }
}

impl Account {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: UserId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    fn ensure_not_suspended(&self) -> Result<(), DomainError> {
        if self.status == AccountStatus::Suspended {
            return Err(DomainError::invariant("account is suspended"));
        }
        Ok(())
    }
}

impl AggregateRoot for Account {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Command to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    /// Role assigned at account-creation time.
    pub role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Command to reassign an account's role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRole {
    pub user_id: UserId,
    pub new_role: Role,
    /// The role of the actor performing this operation (for the admin gate).
    pub actor_role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Command to suspend an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspendAccount {
    pub user_id: UserId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command to activate a suspended account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivateAccount {
    pub user_id: UserId,
    pub occurred_at: DateTime<Utc>,
}

/// All account commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AccountCommand {
    Create(CreateAccount),
    ChangeRole(ChangeRole),
    Suspend(SuspendAccount),
    Activate(ActivateAccount),
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

/// Event emitted when an account is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreated {
    pub user_id: UserId,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Event emitted when an account's role is reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChanged {
    pub user_id: UserId,
    pub role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Event emitted when an account is suspended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSuspended {
    pub user_id: UserId,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event emitted when an account is activated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountActivated {
    pub user_id: UserId,
    pub occurred_at: DateTime<Utc>,
}

/// All account events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AccountEvent {
    Created(AccountCreated),
    RoleChanged(RoleChanged),
    Suspended(AccountSuspended),
    Activated(AccountActivated),
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Created(_) => "auth.account.created",
            AccountEvent::RoleChanged(_) => "auth.account.role_changed",
            AccountEvent::Suspended(_) => "auth.account.suspended",
            AccountEvent::Activated(_) => "auth.account.activated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AccountEvent::Created(e) => e.occurred_at,
            AccountEvent::RoleChanged(e) => e.occurred_at,
            AccountEvent::Suspended(e) => e.occurred_at,
            AccountEvent::Activated(e) => e.occurred_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Aggregate Implementation
// ─────────────────────────────────────────────────────────────────────────────

impl Aggregate for Account {
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            AccountEvent::Created(e) => self.apply_created(e),
            AccountEvent::RoleChanged(e) => self.apply_role_changed(e),
            AccountEvent::Suspended(e) => self.apply_suspended(e),
            AccountEvent::Activated(e) => self.apply_activated(e),
        }
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::Create(cmd) => self.handle_create(cmd),
            AccountCommand::ChangeRole(cmd) => self.handle_change_role(cmd),
            AccountCommand::Suspend(cmd) => self.handle_suspend(cmd),
            AccountCommand::Activate(cmd) => self.handle_activate(cmd),
        }
    }
}

impl Account {
    // ─────────────────────────────────────────────────────────────────────────
    // Command Handlers
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_create(&self, cmd: &CreateAccount) -> Result<Vec<AccountEvent>, DomainError> {
        if self.created {
            return Err(DomainError::invariant("account already exists"));
        }

        // Validate email format (basic check)
        if cmd.email.trim().is_empty() || !cmd.email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }

        if cmd.display_name.trim().is_empty() {
            return Err(DomainError::validation("display name cannot be empty"));
        }

        Ok(vec![AccountEvent::Created(AccountCreated {
            user_id: cmd.user_id,
            email: cmd.email.trim().to_lowercase(),
            display_name: cmd.display_name.trim().to_string(),
            role: cmd.role,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_change_role(&self, cmd: &ChangeRole) -> Result<Vec<AccountEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::NotFound);
        }

        self.ensure_not_suspended()?;

        if self.role == cmd.new_role {
            return Err(DomainError::invariant("role already assigned"));
        }

        // Reassignment is an administrative action: only super admins may do it.
        if cmd.actor_role != Role::SuperAdmin {
            return Err(DomainError::Unauthorized);
        }

        Ok(vec![AccountEvent::RoleChanged(RoleChanged {
            user_id: cmd.user_id,
            role: cmd.new_role,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_suspend(&self, cmd: &SuspendAccount) -> Result<Vec<AccountEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::NotFound);
        }

        if self.status == AccountStatus::Suspended {
            return Err(DomainError::invariant("account already suspended"));
        }

        Ok(vec![AccountEvent::Suspended(AccountSuspended {
            user_id: cmd.user_id,
            reason: cmd.reason.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_activate(&self, cmd: &ActivateAccount) -> Result<Vec<AccountEvent>, DomainError> {
        if !self.created {
            return Err(DomainError::NotFound);
        }

        if self.status == AccountStatus::Active {
            return Err(DomainError::invariant("account already active"));
        }

        Ok(vec![AccountEvent::Activated(AccountActivated {
            user_id: cmd.user_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event Appliers
    // ─────────────────────────────────────────────────────────────────────────

    fn apply_created(&mut self, e: &AccountCreated) {
        self.id = e.user_id;
        self.email = e.email.clone();
        self.display_name = e.display_name.clone();
        self.role = e.role;
        self.status = AccountStatus::Active;
        self.created = true;
    }

    fn apply_role_changed(&mut self, e: &RoleChanged) {
        self.role = e.role;
    }

    fn apply_suspended(&mut self, _e: &AccountSuspended) {
        self.status = AccountStatus::Suspended;
    }

    fn apply_activated(&mut self, _e: &AccountActivated) {
        self.status = AccountStatus::Active;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
