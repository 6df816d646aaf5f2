use crate::api::{ApiClient, SubscriptionStatus, UserProfile};
use log::{debug, warn};

/// Account tier as reported by the profile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Free,
    Pro,
    Admin,
}

impl Role {
    /// Lower-cased, trimmed mapping. Anything unknown is `Free`.
    pub fn from_profile(raw: Option<&str>) -> Self {
        match raw.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("admin") => Self::Admin,
            Some("pro") => Self::Pro,
            _ => Self::Free,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Admin => "admin",
        }
    }
}

/// Subscription plan, tracked separately from the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    pub fn from_status(status: Option<&SubscriptionStatus>) -> Self {
        match status {
            Some(s) if s.status.trim().eq_ignore_ascii_case("pro") => Self::Pro,
            _ => Self::Free,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Pro,
    Admin,
}

/// Parts of the UI that sit behind a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    DashboardCharts,
    Reports,
    AdminConsole,
}

impl Feature {
    pub fn required_tier(&self) -> Tier {
        match self {
            Self::DashboardCharts | Self::Reports => Tier::Pro,
            Self::AdminConsole => Tier::Admin,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DashboardCharts => "Dashboard charts",
            Self::Reports => "Reports",
            Self::AdminConsole => "Admin console",
        }
    }
}

/// The resolved pair every gate reads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Access {
    pub role: Role,
    pub plan: Plan,
    pub subscription_end: Option<String>,
}

impl Access {
    pub fn new(role: Role, plan: Plan) -> Self {
        Self {
            role,
            plan,
            subscription_end: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_pro(&self) -> bool {
        self.is_admin() || self.role == Role::Pro || self.plan == Plan::Pro
    }

    pub fn unlocks(&self, feature: Feature) -> bool {
        match feature.required_tier() {
            Tier::Pro => self.is_pro(),
            Tier::Admin => self.is_admin(),
        }
    }

    /// Label shown on badges: the stronger of role and plan.
    pub fn tier_label(&self) -> &'static str {
        if self.is_admin() {
            "admin"
        } else if self.is_pro() {
            "pro"
        } else {
            "free"
        }
    }
}

pub fn access_from(profile: Option<&UserProfile>, status: Option<&SubscriptionStatus>) -> Access {
    Access {
        role: Role::from_profile(profile.and_then(|p| p.role.as_deref())),
        plan: Plan::from_status(status),
        subscription_end: status.and_then(|s| s.end_date.clone()),
    }
}

/// Profile and subscription are fetched independently; either failing
/// degrades that half to `Free`. Never errors.
pub async fn resolve_access(api: &ApiClient) -> Access {
    let profile = match api.fetch_profile().await {
        Ok(profile) => profile,
        Err(err) => {
            warn!("profile lookup failed, treating as free: {}", err);
            None
        }
    };
    let status = match api.fetch_subscription_status().await {
        Ok(status) => Some(status),
        Err(err) => {
            warn!("subscription lookup failed, treating as free: {}", err);
            None
        }
    };
    let access = access_from(profile.as_ref(), status.as_ref());
    debug!(
        "access resolved: role={} plan={}",
        access.role.as_str(),
        access.plan.as_str()
    );
    access
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(value: &str) -> SubscriptionStatus {
        SubscriptionStatus {
            status: value.into(),
            end_date: None,
        }
    }

    #[test]
    fn role_mapping_normalizes_and_defaults_to_free() {
        assert_eq!(Role::from_profile(Some("ADMIN ")), Role::Admin);
        assert_eq!(Role::from_profile(Some("Pro")), Role::Pro);
        assert_eq!(Role::from_profile(Some("free")), Role::Free);
        assert_eq!(Role::from_profile(Some("owner")), Role::Free);
        assert_eq!(Role::from_profile(None), Role::Free);
    }

    #[test]
    fn role_mapping_is_stable_across_calls() {
        let first = Role::from_profile(Some(" Pro"));
        for _ in 0..5 {
            assert_eq!(Role::from_profile(Some(" Pro")), first);
        }
        assert_eq!(first.as_str(), "pro");
    }

    #[test]
    fn admin_unlocks_everything_regardless_of_plan() {
        let admin = Access::new(Role::Admin, Plan::Free);
        assert!(admin.unlocks(Feature::DashboardCharts));
        assert!(admin.unlocks(Feature::Reports));
        assert!(admin.unlocks(Feature::AdminConsole));
        assert_eq!(admin.tier_label(), "admin");
    }

    #[test]
    fn pro_plan_or_pro_role_each_unlock_pro_features() {
        let by_plan = access_from(None, Some(&status("pro")));
        assert_eq!(by_plan.role, Role::Free);
        assert!(by_plan.unlocks(Feature::Reports));
        assert!(by_plan.unlocks(Feature::DashboardCharts));
        assert!(!by_plan.unlocks(Feature::AdminConsole));

        let by_role = Access::new(Role::Pro, Plan::Free);
        assert!(by_role.unlocks(Feature::Reports));
        assert!(!by_role.is_admin());
    }

    #[test]
    fn free_access_keeps_pro_features_locked() {
        let free = access_from(None, Some(&status("free")));
        assert!(!free.unlocks(Feature::DashboardCharts));
        assert!(!free.unlocks(Feature::Reports));
        assert_eq!(free.tier_label(), "free");
    }
}
