//! Document store tests - add, select, edit, drag

mod common;

use common::{add, assert_selection_invariant, contents, ids, test_model, BLUE, RED};
use placard::commands::Cmd;
use placard::messages::Msg;
use placard::model::{AnnotationId, FontFamily, StylePatch};
use placard::update::update;
use placard::PlacardError;

// ========================================================================
// AddText tests
// ========================================================================

#[test]
fn test_add_appends_with_given_fields() {
    let mut model = test_model();
    let cmd = update(
        &mut model,
        Msg::add_text("hi", 10.0, 20.0, 16.0, RED, FontFamily::Arial),
    );

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.annotations().len(), 1);
    let a = &model.annotations()[0];
    assert_eq!(a.content, "hi");
    assert_eq!((a.x, a.y), (10.0, 20.0));
    assert_eq!(a.font_size, 16.0);
    assert_eq!(a.color, RED);
    assert_eq!(a.font_family, FontFamily::Arial);
}

#[test]
fn test_add_preserves_insertion_order_as_z_order() {
    let mut model = test_model();
    add(&mut model, "bottom", 0.0, 0.0);
    add(&mut model, "middle", 0.0, 0.0);
    add(&mut model, "top", 0.0, 0.0);

    assert_eq!(contents(&model), vec!["bottom", "middle", "top"]);
}

#[test]
fn test_rapid_adds_yield_distinct_ids() {
    let mut model = test_model();
    for i in 0..50 {
        add(&mut model, &format!("note {i}"), 0.0, 0.0);
    }

    let mut seen = ids(&model);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 50);
}

#[test]
fn test_add_keeps_untrimmed_content() {
    let mut model = test_model();
    add(&mut model, "  padded  ", 0.0, 0.0);
    assert_eq!(model.annotations()[0].content, "  padded  ");
}

#[test]
fn test_add_blank_content_is_rejected_before_any_mutation() {
    let mut model = test_model();
    let cmd = update(
        &mut model,
        Msg::add_text("   \t ", 0.0, 0.0, 16.0, RED, FontFamily::Arial),
    );

    assert_eq!(cmd, None);
    assert!(model.annotations().is_empty());
    // No history checkpoint must leak from a rejected add.
    assert!(!model.can_undo());
}

#[test]
fn test_add_rejects_bad_font_sizes() {
    let mut model = test_model();
    for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        let err = model
            .add_annotation("hi", 0.0, 0.0, size, RED, FontFamily::Arial)
            .unwrap_err();
        assert!(matches!(err, PlacardError::InvalidFontSize(_)));
    }
    assert!(model.annotations().is_empty());
    assert!(!model.can_undo());
}

// ========================================================================
// SelectText tests
// ========================================================================

#[test]
fn test_select_and_clear() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);

    assert_eq!(update(&mut model, Msg::select(Some(id))), Some(Cmd::Redraw));
    assert_eq!(model.selected_id(), Some(id));
    assert_eq!(model.selected().unwrap().content, "hi");

    assert_eq!(update(&mut model, Msg::select(None)), Some(Cmd::Redraw));
    assert_eq!(model.selected_id(), None);
}

#[test]
fn test_select_same_id_is_not_a_change() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    assert_eq!(update(&mut model, Msg::select(Some(id))), None);
}

#[test]
fn test_select_unknown_id_is_rejected() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    let cmd = update(&mut model, Msg::select(Some(AnnotationId(999))));
    assert_eq!(cmd, None);
    // Rejected selection leaves the previous one in place.
    assert_eq!(model.selected_id(), Some(id));
    assert_selection_invariant(&model);
}

#[test]
fn test_selection_is_not_tracked_in_history() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    assert_eq!(model.history.past_depth(), 1);

    update(&mut model, Msg::select(Some(id)));
    update(&mut model, Msg::select(None));
    assert_eq!(model.history.past_depth(), 1);
}

// ========================================================================
// UpdateSelected tests
// ========================================================================

#[test]
fn test_update_selected_applies_each_field() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    update(&mut model, Msg::update_selected(StylePatch::content("bye")));
    update(&mut model, Msg::update_selected(StylePatch::font_size(24.0)));
    update(&mut model, Msg::update_selected(StylePatch::color(BLUE)));
    update(
        &mut model,
        Msg::update_selected(StylePatch::font_family(FontFamily::Verdana)),
    );

    let a = model.selected().unwrap();
    assert_eq!(a.content, "bye");
    assert_eq!(a.font_size, 24.0);
    assert_eq!(a.color, BLUE);
    assert_eq!(a.font_family, FontFamily::Verdana);
    // One checkpoint per edit, on top of the initial add.
    assert_eq!(model.history.past_depth(), 5);
}

#[test]
fn test_update_selected_combined_patch_is_one_checkpoint() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    let patch = StylePatch {
        content: Some("bye".to_string()),
        font_size: Some(32.0),
        color: Some(BLUE),
        font_family: Some(FontFamily::Georgia),
    };
    update(&mut model, Msg::update_selected(patch));

    assert_eq!(model.history.past_depth(), 2);
    let a = model.selected().unwrap();
    assert_eq!((a.content.as_str(), a.font_size), ("bye", 32.0));
}

#[test]
fn test_update_without_selection_is_a_noop() {
    let mut model = test_model();
    add(&mut model, "hi", 0.0, 0.0);

    let cmd = update(&mut model, Msg::update_selected(StylePatch::font_size(24.0)));
    assert_eq!(cmd, None);
    assert_eq!(model.annotations()[0].font_size, 16.0);
    assert_eq!(model.history.past_depth(), 1);
}

#[test]
fn test_empty_patch_records_no_checkpoint() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    let cmd = update(&mut model, Msg::update_selected(StylePatch::default()));
    assert_eq!(cmd, None);
    assert_eq!(model.history.past_depth(), 1);
}

#[test]
fn test_identical_value_still_counts_as_an_edit() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    update(&mut model, Msg::update_selected(StylePatch::content("hi")));
    assert_eq!(model.history.past_depth(), 2);
}

#[test]
fn test_invalid_patch_is_rejected_without_history_corruption() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);
    update(&mut model, Msg::select(Some(id)));

    assert_eq!(
        update(&mut model, Msg::update_selected(StylePatch::content("  "))),
        None
    );
    assert_eq!(
        update(&mut model, Msg::update_selected(StylePatch::font_size(-1.0))),
        None
    );

    assert_eq!(model.selected().unwrap().content, "hi");
    assert_eq!(model.history.past_depth(), 1);
}

#[test]
fn test_edits_never_move_the_annotation() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 40.0, 50.0);
    update(&mut model, Msg::select(Some(id)));

    update(&mut model, Msg::update_selected(StylePatch::content("moved?")));
    update(&mut model, Msg::update_selected(StylePatch::font_size(40.0)));

    let a = model.selected().unwrap();
    assert_eq!((a.x, a.y), (40.0, 50.0));
}

// ========================================================================
// DragText tests
// ========================================================================

#[test]
fn test_drag_updates_only_position() {
    let mut model = test_model();
    let id = add(&mut model, "hi", 0.0, 0.0);

    let cmd = update(&mut model, Msg::drag(id, 120.0, 80.0));
    assert_eq!(cmd, Some(Cmd::Redraw));

    let a = &model.annotations()[0];
    assert_eq!((a.x, a.y), (120.0, 80.0));
    assert_eq!(a.content, "hi");
    assert_eq!(a.font_size, 16.0);
}

#[test]
fn test_drag_unknown_id_is_ignored() {
    let mut model = test_model();
    add(&mut model, "hi", 1.0, 2.0);

    let cmd = update(&mut model, Msg::drag(AnnotationId(999), 50.0, 50.0));
    assert_eq!(cmd, None);
    assert_eq!((model.annotations()[0].x, model.annotations()[0].y), (1.0, 2.0));
}

#[test]
fn test_drag_does_not_touch_selection() {
    let mut model = test_model();
    let first = add(&mut model, "a", 0.0, 0.0);
    let second = add(&mut model, "b", 0.0, 0.0);
    update(&mut model, Msg::select(Some(first)));

    update(&mut model, Msg::drag(second, 10.0, 10.0));
    assert_eq!(model.selected_id(), Some(first));
}
