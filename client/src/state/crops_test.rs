use super::*;

fn crop(id: &str) -> Crop {
    Crop {
        id: id.to_owned(),
        name: format!("crop {id}"),
        bag: None,
        qty: None,
        base_price: None,
        trigger_price: None,
        created_at: None,
        seller_id: None,
    }
}

fn server_error(message: &str) -> ApiError {
    ApiError::Status {
        status: 500,
        message: Some(message.to_owned()),
    }
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn default_state_is_initial_loading() {
    let state = CropsState::default();
    assert!(state.is_initial_loading());
    assert!(state.items.is_empty());
    assert!(state.error_lines().is_empty());
}

#[test]
fn successful_fetch_replaces_items() {
    let mut state = CropsState::default();
    state.begin_fetch();
    assert!(state.fetching);
    state.finish_fetch(Ok(vec![crop("a"), crop("b")]));
    assert!(!state.fetching);
    assert!(!state.is_initial_loading());
    assert_eq!(state.items.len(), 2);
}

#[test]
fn refetch_does_not_return_to_initial_loading() {
    let mut state = CropsState::default();
    state.begin_fetch();
    state.finish_fetch(Ok(vec![crop("a")]));
    state.begin_fetch();
    assert!(state.fetching);
    assert!(!state.is_initial_loading());
}

#[test]
fn failed_fetch_keeps_previous_items() {
    let mut state = CropsState::default();
    state.begin_fetch();
    state.finish_fetch(Ok(vec![crop("a")]));
    state.begin_fetch();
    state.finish_fetch(Err(server_error("db down")));
    assert_eq!(state.items, vec![crop("a")]);
    assert_eq!(state.fetch_error.as_deref(), Some("db down"));
}

#[test]
fn failed_first_fetch_ends_initial_loading() {
    let mut state = CropsState::default();
    state.begin_fetch();
    state.finish_fetch(Err(ApiError::Network("offline".to_owned())));
    assert!(!state.is_initial_loading());
    assert_eq!(state.error_lines(), vec!["Error fetching crops: network error: offline".to_owned()]);
}

#[test]
fn next_fetch_attempt_clears_fetch_error() {
    let mut state = CropsState::default();
    state.begin_fetch();
    state.finish_fetch(Err(server_error("boom")));
    state.begin_fetch();
    assert_eq!(state.fetch_error, None);
}

// =============================================================
// Mutation slots
// =============================================================

#[test]
fn begin_and_finish_track_in_flight() {
    let mut state = CropsState::default();
    state.begin(Mutation::Remove);
    assert!(state.remove.is_pending());
    assert!(!state.publish.is_pending());
    state.finish(Mutation::Remove, None);
    assert!(!state.remove.is_pending());
}

#[test]
fn overlapping_calls_stay_pending_until_all_finish() {
    let mut state = CropsState::default();
    state.begin(Mutation::Publish);
    state.begin(Mutation::Publish);
    state.finish(Mutation::Publish, None);
    assert!(state.publish.is_pending());
    state.finish(Mutation::Publish, None);
    assert!(!state.publish.is_pending());
}

#[test]
fn finish_without_begin_does_not_underflow() {
    let mut state = CropsState::default();
    state.finish(Mutation::Add, None);
    assert_eq!(state.add.in_flight, 0);
}

#[test]
fn errors_are_independent_per_operation() {
    let mut state = CropsState::default();
    state.begin(Mutation::Update);
    state.finish(Mutation::Update, Some(&server_error("bad update")));
    state.begin(Mutation::Remove);
    state.finish(Mutation::Remove, Some(&server_error("bad delete")));

    // A new publish attempt must not clear other slots.
    state.begin(Mutation::Publish);
    state.finish(Mutation::Publish, None);

    assert_eq!(state.update.error.as_deref(), Some("bad update"));
    assert_eq!(state.remove.error.as_deref(), Some("bad delete"));
    assert_eq!(state.publish.error, None);
}

#[test]
fn next_attempt_of_same_operation_clears_its_error() {
    let mut state = CropsState::default();
    state.begin(Mutation::Add);
    state.finish(Mutation::Add, Some(&server_error("first")));
    state.begin(Mutation::Add);
    assert_eq!(state.add.error, None);
    state.finish(Mutation::Add, None);
    assert_eq!(state.add.error, None);
}

#[test]
fn error_lines_render_in_fixed_order() {
    let mut state = CropsState::default();
    state.fetch_error = Some("f".to_owned());
    state.publish.error = Some("p".to_owned());
    state.add.error = Some("a".to_owned());
    state.remove.error = Some("r".to_owned());
    state.update.error = Some("u".to_owned());
    assert_eq!(
        state.error_lines(),
        vec![
            "Error fetching crops: f".to_owned(),
            "Error adding crop details: a".to_owned(),
            "Error updating crop details: u".to_owned(),
            "Error removing crop: r".to_owned(),
            "Error publishing crop: p".to_owned(),
        ]
    );
}

#[test]
fn status_lookup_matches_fields() {
    let mut state = CropsState::default();
    state.begin(Mutation::Update);
    assert_eq!(state.status(Mutation::Update).in_flight, 1);
    assert_eq!(state.status(Mutation::Add).in_flight, 0);
}
