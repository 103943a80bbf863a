use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::server::{
    controller::{
        account::{check_role, create_account, get_accounts, get_instructors, set_role},
        auth::{health, issue_token},
        cart::{add_to_cart, get_cart, get_cart_entry, remove_from_cart},
        class::{
            create_class, get_class, get_classes, get_my_classes, set_class_feedback,
            set_class_status, update_class,
        },
        enrollment::{finalize_enrollment, get_enrollments},
        payment::create_payment_intent,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/jwt", post(issue_token))
        .merge(catalog_routes())
        .merge(account_routes())
        .merge(enrollment_routes())
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(get_classes).post(create_class))
        .route("/classes/instructor", get(get_my_classes))
        .route("/classes/{id}", get(get_class).patch(update_class))
        .route("/classstatus/{id}", patch(set_class_status))
        .route("/feedback/{id}", put(set_class_feedback))
}

fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/instructors", get(get_instructors))
        .route("/users", get(get_accounts).post(create_account))
        .route("/users/role", patch(set_role))
        .route("/users/{role}/{email}", get(check_role))
}

fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/classlist", get(get_cart).post(add_to_cart))
        .route(
            "/classlist/{id}",
            get(get_cart_entry).delete(remove_from_cart),
        )
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/enrolled", get(get_enrollments))
        .route("/payments", post(finalize_enrollment))
}
