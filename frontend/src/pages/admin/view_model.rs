use super::{
    repository,
    utils::{filter_param, parse_duration, AdminTab, TicketReplyForm},
};
use crate::{
    api::{ApiError, Payment, PaymentDecision, SupportTicket, UserProfile},
    state::{access::Role, auth::use_refresh_access_action, use_api},
};
use leptos::*;

type RolePayload = (String, Role);
type DecisionPayload = (String, PaymentDecision);
type TicketPayload = (String, TicketReplyForm);

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub tab: RwSignal<AdminTab>,
    pub error: RwSignal<Option<ApiError>>,
    pub notice: RwSignal<Option<String>>,

    pub users: Resource<u32, Result<Vec<UserProfile>, ApiError>>,
    pub role_action: Action<RolePayload, Result<(), ApiError>>,

    pub payment_filter: RwSignal<String>,
    pub payments: Resource<(String, u32), Result<Vec<Payment>, ApiError>>,
    pub verify_action: Action<DecisionPayload, Result<PaymentDecision, ApiError>>,

    pub ticket_filter: RwSignal<String>,
    pub tickets: Resource<(String, u32), Result<Vec<SupportTicket>, ApiError>>,
    pub replying: RwSignal<Option<String>>,
    pub reply_form: RwSignal<TicketReplyForm>,
    pub ticket_action: Action<TicketPayload, Result<(), ApiError>>,

    pub duration: Resource<u32, Result<u32, ApiError>>,
    pub duration_input: RwSignal<String>,
    pub duration_action: Action<u32, Result<u32, ApiError>>,

    reload: RwSignal<u32>,
}

impl AdminViewModel {
    pub fn select_tab(&self, tab: AdminTab) {
        self.tab.set(tab);
        self.error.set(None);
        self.notice.set(None);
    }

    pub fn change_role(&self, user_id: String, role: Role) {
        self.role_action.dispatch((user_id, role));
    }

    pub fn decide(&self, payment_id: String, decision: PaymentDecision) {
        self.verify_action.dispatch((payment_id, decision));
    }

    pub fn open_reply(&self, ticket: &SupportTicket) {
        self.reply_form.set(TicketReplyForm {
            response: ticket.response.clone().unwrap_or_default(),
            ..TicketReplyForm::default()
        });
        self.replying.set(Some(ticket.id.clone()));
    }

    pub fn send_reply(&self) {
        let Some(ticket_id) = self.replying.get_untracked() else {
            return;
        };
        let form = self.reply_form.get_untracked();
        match form.to_update() {
            Ok(_) => self.ticket_action.dispatch((ticket_id, form)),
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn save_duration(&self) {
        match parse_duration(&self.duration_input.get_untracked()) {
            Ok(days) => {
                self.error.set(None);
                self.duration_action.dispatch(days);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    fn reload(&self) {
        self.reload.update(|n| *n += 1);
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_api();
    let refresh_access = use_refresh_access_action();
    let reload = create_rw_signal(0u32);
    let payment_filter = create_rw_signal("pending".to_string());
    let ticket_filter = create_rw_signal("pending".to_string());

    let api_users = api.clone();
    let users = create_resource(
        move || reload.get(),
        move |_| {
            let api = api_users.clone();
            async move { repository::fetch_users(&api).await }
        },
    );

    let api_role = api.clone();
    let role_action = create_action(move |(user_id, role): &RolePayload| {
        let api = api_role.clone();
        let (user_id, role) = (user_id.clone(), *role);
        async move { repository::change_role(&api, &user_id, role).await }
    });

    let api_payments = api.clone();
    let payments = create_resource(
        move || (payment_filter.get(), reload.get()),
        move |(filter, _)| {
            let api = api_payments.clone();
            async move { repository::fetch_payments(&api, filter_param(&filter)).await }
        },
    );

    let api_verify = api.clone();
    let verify_action = create_action(move |(payment_id, decision): &DecisionPayload| {
        let api = api_verify.clone();
        let (payment_id, decision) = (payment_id.clone(), *decision);
        async move {
            repository::decide_payment(&api, &payment_id, decision).await?;
            Ok(decision)
        }
    });

    let api_tickets = api.clone();
    let tickets = create_resource(
        move || (ticket_filter.get(), reload.get()),
        move |(filter, _)| {
            let api = api_tickets.clone();
            async move { repository::fetch_tickets(&api, filter_param(&filter)).await }
        },
    );

    let api_ticket = api.clone();
    let ticket_action = create_action(move |(ticket_id, form): &TicketPayload| {
        let api = api_ticket.clone();
        let (ticket_id, form) = (ticket_id.clone(), form.clone());
        async move {
            let update = form.to_update()?;
            repository::update_ticket(&api, &ticket_id, update).await
        }
    });

    let api_duration = api.clone();
    let duration = create_resource(
        move || reload.get(),
        move |_| {
            let api = api_duration.clone();
            async move { repository::fetch_duration(&api).await }
        },
    );

    let duration_action = create_action(move |days: &u32| {
        let api = api.clone();
        let days = *days;
        async move { repository::save_duration(&api, days).await }
    });

    let vm = AdminViewModel {
        tab: create_rw_signal(AdminTab::default()),
        error: create_rw_signal(None),
        notice: create_rw_signal(None),
        users,
        role_action,
        payment_filter,
        payments,
        verify_action,
        ticket_filter,
        tickets,
        replying: create_rw_signal(None),
        reply_form: create_rw_signal(TicketReplyForm::default()),
        ticket_action,
        duration,
        duration_input: create_rw_signal(String::new()),
        duration_action,
        reload,
    };

    create_effect(move |_| {
        if let Some(Ok(days)) = duration.get() {
            vm.duration_input.set(days.to_string());
        }
    });

    create_effect(move |_| {
        if let Some(result) = role_action.value().get() {
            match result {
                Ok(()) => {
                    vm.notice.set(Some("User role updated".into()));
                    vm.reload();
                    refresh_access.dispatch(());
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(decision) => {
                    let message = match decision {
                        PaymentDecision::Approved => "Payment approved",
                        PaymentDecision::Rejected => "Payment rejected",
                    };
                    vm.notice.set(Some(message.into()));
                    vm.reload();
                    if decision == PaymentDecision::Approved {
                        refresh_access.dispatch(());
                    }
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = ticket_action.value().get() {
            match result {
                Ok(()) => {
                    vm.replying.set(None);
                    vm.notice.set(Some("Ticket updated".into()));
                    vm.reload();
                }
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = duration_action.value().get() {
            match result {
                Ok(days) => vm
                    .notice
                    .set(Some(format!("Subscription duration set to {} days", days))),
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::access::Plan;
    use crate::test_support::helpers::{access, admin_profile, provide_auth, provide_memory_session};
    use crate::test_support::ssr::with_runtime;

    fn setup() -> AdminViewModel {
        provide_memory_session(Some("abc"));
        provide_auth(admin_profile(), Some(access(Role::Admin, Plan::Free)));
        use_admin_view_model()
    }

    #[test]
    fn invalid_duration_is_not_dispatched() {
        with_runtime(|| {
            let vm = setup();
            vm.duration_input.set("0".into());
            vm.save_duration();
            assert_eq!(
                vm.error.get_untracked().map(|e| e.code()),
                Some("VALIDATION_ERROR".to_string())
            );
            assert!(vm.duration_action.input().get_untracked().is_none());
        });
    }

    #[test]
    fn reply_requires_an_open_ticket() {
        with_runtime(|| {
            let vm = setup();
            vm.send_reply();
            assert!(vm.ticket_action.input().get_untracked().is_none());

            vm.open_reply(&SupportTicket {
                id: "t1".into(),
                subject: None,
                message: "Help".into(),
                status: "pending".into(),
                created_at: None,
                response: Some("On it".into()),
                user: None,
            });
            assert_eq!(vm.replying.get_untracked().as_deref(), Some("t1"));
            assert_eq!(vm.reply_form.get_untracked().response, "On it");
            assert_eq!(vm.reply_form.get_untracked().status, "resolved");
        });
    }

    #[test]
    fn switching_tabs_clears_messages() {
        with_runtime(|| {
            let vm = setup();
            vm.notice.set(Some("done".into()));
            vm.select_tab(AdminTab::Support);
            assert_eq!(vm.tab.get_untracked(), AdminTab::Support);
            assert!(vm.notice.get_untracked().is_none());
        });
    }
}
