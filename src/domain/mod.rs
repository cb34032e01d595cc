//! Domain logic for project state: derivations, permissions, and the
//! closure workflow

mod derive;
mod permissions;
mod states;
mod transitions;
mod validation;


pub use derive::{
    annotate_overdue, calculate_progress, count_overdue, milestone_is_overdue, parse_instant,
};
pub use permissions::{
    available_actions, can_archive, can_generate_certificate, can_initiate_signoff,
    can_review_final_report, Actor, ClosureAction, GRANTS_MANAGER_ROLE,
};
pub use states::{
    allowed_next_statuses, is_terminal, next_status, sequence_index, CLOSURE_SEQUENCE,
};
pub use transitions::{
    apply_vc_decision, archive_project, generate_certificate, initiate_vc_signoff,
    review_final_report, submit_final_reports, validate_closure_transition,
};
pub use validation::{
    validate_final_report, validate_project, validate_requisition, ValidationResult,
};
