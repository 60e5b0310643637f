use cardcraft::command::{Command, ElementPatch};
use cardcraft::element::{factory, ElementId};
use cardcraft::EditorModel;
use egui::Pos2;

fn add_text(model: &mut EditorModel, at: Pos2) -> ElementId {
    let element = factory::create_text(at);
    let id = element.id;
    assert!(model.apply(Command::Add(element)));
    id
}

#[test]
fn add_then_undo_returns_to_empty() {
    let mut model = EditorModel::new();
    let id = add_text(&mut model, Pos2::new(50.0, 50.0));

    assert_eq!(model.document().len(), 1);
    assert_eq!(model.selection().active(), Some(id));

    assert!(model.undo());
    assert!(model.document().is_empty());
    assert!(model.selection().active().is_none());
}

#[test]
fn undo_redo_walk_the_full_mutation_sequence() {
    let mut model = EditorModel::new();

    // Three mutations: add, add, patch.
    let a = add_text(&mut model, Pos2::new(10.0, 10.0));
    let _b = add_text(&mut model, Pos2::new(20.0, 20.0));
    assert!(model.apply(Command::Patch {
        id: a,
        patch: ElementPatch::text("updated"),
    }));

    let final_elements = model.document().elements().to_vec();

    assert!(model.undo());
    assert!(model.undo());
    assert!(model.undo());
    assert!(model.document().is_empty());
    assert!(!model.undo(), "history exhausted");

    assert!(model.redo());
    assert!(model.redo());
    assert!(model.redo());
    assert_eq!(model.document().elements(), final_elements.as_slice());
    assert!(!model.redo(), "redo exhausted");
}

#[test]
fn new_mutation_after_undo_clears_redo() {
    let mut model = EditorModel::new();
    add_text(&mut model, Pos2::new(10.0, 10.0));
    add_text(&mut model, Pos2::new(20.0, 20.0));

    assert!(model.undo());
    assert!(model.can_redo());

    add_text(&mut model, Pos2::new(30.0, 30.0));
    assert!(!model.can_redo());
    assert!(!model.redo());
}

#[test]
fn snapshots_are_value_independent_of_the_live_document() {
    let mut model = EditorModel::new();
    let id = add_text(&mut model, Pos2::new(10.0, 10.0));

    // Mutate after the snapshot was recorded.
    assert!(model.apply(Command::Patch {
        id,
        patch: ElementPatch::text("after"),
    }));

    assert!(model.undo());
    let restored = model.document().find(id).unwrap();
    match &restored.shape {
        cardcraft::Shape::Text(text) => assert_eq!(text.text, "New Text"),
        other => panic!("expected text element, got {}", other.kind()),
    }
}

#[test]
fn noop_patch_pushes_no_history_entry() {
    let mut model = EditorModel::new();
    add_text(&mut model, Pos2::new(10.0, 10.0));
    let before = model.document().elements().to_vec();

    let missing = {
        // An id that is definitely not in the document.
        let stray = factory::create_text(Pos2::ZERO);
        stray.id
    };
    assert!(!model.apply(Command::Patch {
        id: missing,
        patch: ElementPatch::text("never lands"),
    }));

    assert_eq!(model.document().elements(), before.as_slice());

    // The single undo must revert the add, not replay a phantom patch.
    assert!(model.undo());
    assert!(model.document().is_empty());
}

#[test]
fn undo_and_redo_clear_selection() {
    let mut model = EditorModel::new();
    let id = add_text(&mut model, Pos2::new(10.0, 10.0));
    add_text(&mut model, Pos2::new(20.0, 20.0));

    model.select(id);
    assert!(model.undo());
    assert!(model.selection().is_empty());

    model.select(id);
    assert!(model.redo());
    assert!(model.selection().is_empty());
}

#[test]
fn capped_history_evicts_oldest() {
    use cardcraft::History;

    let mut history = History::with_max_depth(2);
    let a = vec![factory::create_text(Pos2::ZERO)];
    let b = vec![factory::create_text(Pos2::ZERO)];
    let c = vec![factory::create_text(Pos2::ZERO)];

    history.record(a);
    history.record(b.clone());
    history.record(c.clone());
    assert_eq!(history.undo_depth(), 2);

    let current: Vec<cardcraft::Element> = Vec::new();
    assert_eq!(history.undo(&current), Some(c));
    assert_eq!(history.undo(&current), Some(b));
    assert!(history.undo(&current).is_none());
}
