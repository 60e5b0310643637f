use cardcraft::command::Command;
use cardcraft::element::factory;
use cardcraft::state::StorageError;
use cardcraft::{DesignStore, Document, EditorModel};
use egui::Pos2;

fn document_with_every_kind() -> Document {
    let mut model = EditorModel::with_document(Document::with_size(620.0, 750.0));
    let elements = [
        factory::create_text(Pos2::new(10.0, 10.0)),
        factory::create_rect(Pos2::new(20.0, 20.0)),
        factory::create_circle(Pos2::new(120.0, 120.0)),
        factory::create_line(Pos2::new(30.0, 30.0)),
        factory::create_arrow(Pos2::new(40.0, 40.0)),
        factory::create_triangle(Pos2::new(200.0, 200.0)),
        factory::create_star(Pos2::new(300.0, 300.0)),
        factory::create_image(Pos2::new(100.0, 100.0), 640.0, 480.0, Some("bg.png".into())),
    ];
    for el in elements {
        assert!(model.apply(Command::Add(el)));
    }
    model.set_background("https://example.com/floral.jpg".to_owned().into());
    model.document().clone()
}

#[test]
fn document_round_trips_through_json() {
    let original = document_with_every_kind();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn loading_tolerates_missing_optional_fields() {
    // A minimal snapshot from an older save: no opacity/visible/locked, no
    // style fields beyond the required geometry.
    let json = r#"{
        "elements": [
            { "id": 7, "kind": "text", "x": 5.0, "y": 6.0 },
            { "id": 8, "kind": "rect", "width": 50.0, "height": 40.0 },
            { "id": 9, "kind": "star", "innerRadius": 10.0, "outerRadius": 20.0 }
        ]
    }"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.len(), 3);

    let text = &doc.elements()[0];
    assert_eq!(text.opacity, 1.0);
    assert!(text.visible);
    assert!(!text.locked);
    match &text.shape {
        cardcraft::Shape::Text(t) => {
            assert_eq!(t.font_size, 24.0);
            assert_eq!(t.font_family, "Arial");
            assert_eq!(t.line_height, 1.2);
        }
        _ => unreachable!(),
    }
    match &doc.elements()[2].shape {
        cardcraft::Shape::Star(s) => assert_eq!(s.num_points, 5),
        _ => unreachable!(),
    }
    assert_eq!(doc.width(), 620.0);
    assert_eq!(doc.height(), 750.0);
}

#[test]
fn session_save_and_load_round_trip() {
    let mut store = DesignStore::in_memory();
    let doc = document_with_every_kind();

    store.save_session("blank", &doc).unwrap();
    let loaded = store.load_session("blank").unwrap().unwrap();
    assert_eq!(loaded, doc);

    assert!(store.load_session("other-template").unwrap().is_none());

    store.clear_session("blank").unwrap();
    assert!(store.load_session("blank").unwrap().is_none());
}

#[test]
fn named_designs_lifecycle() {
    let mut store = DesignStore::in_memory();
    let doc = document_with_every_kind();

    let saved = store.save_design("our wedding", &doc).unwrap();
    assert_eq!(saved.name, "our wedding");
    assert_eq!(saved.document, doc);

    let listed = store.designs().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);

    let mut updated_doc = doc.clone();
    updated_doc.replace_elements(Vec::new());
    let updated = store.update_design(saved.id, &updated_doc).unwrap().unwrap();
    assert!(updated.document.is_empty());
    assert!(updated.updated_at >= saved.updated_at);

    assert!(store.delete_design(saved.id).unwrap());
    assert!(store.designs().unwrap().is_empty());
    assert!(!store.delete_design(saved.id).unwrap());
}

#[test]
fn templates_are_a_separate_collection() {
    let mut store = DesignStore::in_memory();
    let doc = document_with_every_kind();

    let template = store.save_template("classic floral", &doc).unwrap();
    assert!(store.designs().unwrap().is_empty());
    assert_eq!(store.templates().unwrap().len(), 1);
    assert_eq!(store.template(template.id).unwrap().unwrap().id, template.id);
}

#[test]
fn fs_backend_persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let doc = document_with_every_kind();

    {
        let mut store = DesignStore::on_disk(dir.path());
        store.save_session("editor_blank", &doc).unwrap();
        store.save_design("kept", &doc).unwrap();
    }

    let store = DesignStore::on_disk(dir.path());
    assert_eq!(store.load_session("editor_blank").unwrap().unwrap(), doc);
    assert_eq!(store.designs().unwrap().len(), 1);
}

#[test]
fn save_hook_failure_does_not_abort_the_mutation() {
    let mut model = EditorModel::new();
    model.set_save_hook(Box::new(|_doc| {
        Err(StorageError::Io(std::io::Error::other("quota exceeded")))
    }));

    assert!(model.apply(Command::Add(factory::create_text(Pos2::ZERO))));
    assert_eq!(model.document().len(), 1);
    assert!(model.can_undo());
}

#[test]
fn save_hook_sees_every_successful_mutation() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let counter = Rc::new(RefCell::new(0usize));
    let seen = Rc::clone(&counter);

    let mut model = EditorModel::new();
    model.set_save_hook(Box::new(move |_doc| {
        *seen.borrow_mut() += 1;
        Ok(())
    }));

    let element = factory::create_text(Pos2::ZERO);
    let missing_id = factory::create_text(Pos2::ZERO).id;
    assert!(model.apply(Command::Add(element)));
    assert!(!model.apply(Command::Delete {
        ids: vec![missing_id]
    }));
    assert!(model.undo());

    // Two successful mutations (add, undo); the no-op delete is not saved.
    assert_eq!(*counter.borrow(), 2);
}
