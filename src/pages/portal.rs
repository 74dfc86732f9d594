//! Placeholder views behind the guarded routes.
//!
//! The transfer, loan, fixed-deposit and console screens are served by the
//! business modules; this crate only decides who reaches them.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::RouteTable;
use crate::routing::table::{ADMIN_HOME, CUSTOMER_HOME, EMPLOYEE_HOME, JOB_APPLICATION, REGISTER};
use crate::state::auth::AuthContext;

/// Heading for the view registered under `pattern`.
pub fn view_title(pattern: &str) -> Option<&'static str> {
    let title = match pattern {
        REGISTER => "Open an Account",
        JOB_APPLICATION => "Employee Booth",
        CUSTOMER_HOME => "My Account",
        "/transfer" => "Transfer Money",
        "/check-balance" => "Check Balance",
        "/history" => "Transaction History",
        "/apply-loan" => "Apply for a Loan",
        "/my-loans" => "My Loans",
        "/apply-fd" => "Open a Fixed Deposit",
        "/my-fds" => "My Fixed Deposits",
        ADMIN_HOME => "Admin Portal",
        "/admin/pending" => "Pending Accounts",
        "/admin/applications" => "Job Applications",
        "/admin/applications/:app_id" => "Application Details",
        "/admin/loan/pending" => "Pending Loans",
        "/admin/fd/pending" => "Pending Fixed Deposits",
        EMPLOYEE_HOME => "Employee Portal",
        "/employee/deposit" => "Cash Deposit",
        "/employee/withdraw" => "Cash Withdrawal",
        "/employee/check-balance" => "Customer Balance",
        _ => return None,
    };
    Some(title)
}

#[component]
pub fn PortalPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let table = expect_context::<RouteTable>();
    let pathname = use_location().pathname;

    let title = move || {
        pathname.with(|path| table.lookup(path).and_then(|rule| view_title(rule.pattern)).unwrap_or_default())
    };
    let signed_in_as = move || {
        auth.session()
            .identity()
            .map(|identity| format!("Signed in as {} ({})", identity.subject_id, identity.role))
            .unwrap_or_default()
    };

    view! {
        <div class="portal-page">
            <h1>{title}</h1>
            <p class="portal-page__identity">{signed_in_as}</p>
        </div>
    }
}
