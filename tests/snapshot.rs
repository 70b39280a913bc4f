use lantern::output::OutFrame;
use lantern::services::snapshot::decode_world;
use lantern::{Flow, Session, SnapshotFormat, SnapshotStore};
use std::path::PathBuf;
use uuid::Uuid;

const WORLD: &str = r#"
name: Save House
current_room_id: 1
player:
  name: Tester
rooms:
  - id: 1
    name: Kitchen
    exits:
      - name: door
        direction: east
        room_id: 2
    items:
      - name: fridge
        openable: true
        items:
          - name: bottle
            takeable: true
      - name: key
        takeable: true
  - id: 2
    name: Hall
    exits:
      - name: door
        direction: west
        room_id: 1
"#;

struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("lantern-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn session(dir: &TempDir, format: SnapshotFormat) -> Session {
    let world = decode_world(WORLD, SnapshotFormat::Yaml).unwrap();
    let mut s = Session::new(world, SnapshotStore::new(&dir.0, &dir.0, format));
    s.intro();
    s.drain();
    s
}

fn say(s: &mut Session, line: &str) -> Vec<OutFrame> {
    assert_eq!(s.handle_line(line), Flow::Continue);
    s.drain()
}

#[test]
fn save_then_load_restores_the_world() {
    let dir = TempDir::new();
    let mut s = session(&dir, SnapshotFormat::Yaml);

    say(&mut s, "open fridge");
    say(&mut s, "take bottle");
    say(&mut s, "go east");
    assert_eq!(say(&mut s, "save slot1"), vec![OutFrame::System("Game saved.".into())]);
    assert!(s.world().saved_game);
    assert!(dir.0.join("slot1.yaml").is_file());
    assert!(!dir.0.join("slot1.yaml.tmp").exists());
    let saved = s.world().clone();

    say(&mut s, "go west");
    say(&mut s, "take key");
    let frames = say(&mut s, "load slot1");
    assert_eq!(frames[0], OutFrame::System("Game loaded.".into()));
    assert!(matches!(&frames[1], OutFrame::RoomView { content } if content.starts_with("Hall\n")));

    assert_eq!(*s.world(), saved);
    let names: Vec<&str> = s.world().player.inventory.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["bottle"]);
}

#[test]
fn json_slots_round_trip() {
    let dir = TempDir::new();
    let mut s = session(&dir, SnapshotFormat::Json);

    say(&mut s, "take key");
    say(&mut s, "save one");
    assert!(dir.0.join("one.json").is_file());

    let store = SnapshotStore::new(&dir.0, &dir.0, SnapshotFormat::Json);
    let mut loaded = store.load_slot("one").unwrap();
    loaded.display_room_info = false;
    assert_eq!(loaded, *s.world());
}

#[test]
fn failed_load_leaves_world_alone() {
    let dir = TempDir::new();
    let mut s = session(&dir, SnapshotFormat::Yaml);
    say(&mut s, "take key");
    let before = s.world().clone();

    assert_eq!(
        say(&mut s, "load missing"),
        vec![OutFrame::Error("Unable to load game missing.".into())]
    );
    assert_eq!(*s.world(), before);

    // a slot pointing at a room that does not exist is rejected
    std::fs::write(dir.0.join("broken.yaml"), "current_room_id: 9\nrooms:\n  - id: 1\n").unwrap();
    assert_eq!(
        say(&mut s, "load broken"),
        vec![OutFrame::Error("Unable to load game broken.".into())]
    );
    assert_eq!(*s.world(), before);
}

#[test]
fn bad_slot_names_are_refused() {
    let dir = TempDir::new();
    let mut s = session(&dir, SnapshotFormat::Yaml);

    assert_eq!(
        say(&mut s, "save ../escape"),
        vec![OutFrame::Error("Unable to save game ../escape.".into())]
    );
    assert!(!s.world().saved_game);
    assert_eq!(
        say(&mut s, "save"),
        vec![OutFrame::Error("Unable to save game .".into())]
    );
}

#[test]
fn shipped_worlds_load_and_play() {
    let dir = TempDir::new();
    let conf = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("conf");
    let store = SnapshotStore::new(&conf, &dir.0, SnapshotFormat::Yaml);

    assert_eq!(store.languages().unwrap(), ["en", "es"]);
    assert!(store.load_language("es").is_ok());

    let world = store.load_language("en").unwrap();
    let mut s = Session::new(world, store);
    s.intro();
    s.drain();

    say(&mut s, "take key");
    let frames = say(&mut s, "use key on oak door");
    assert_eq!(frames[0], OutFrame::Line("The key turns with a dry click.".into()));
    assert_eq!(s.world().current_room().name, "Hall");

    say(&mut s, "take crowbar");
    say(&mut s, "use crowbar on chest");
    assert_eq!(
        say(&mut s, "take lantern"),
        vec![OutFrame::Line("lantern added to your inventory.".into())]
    );
}
