pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod notice;
pub mod shortcuts;
pub mod store;

pub use editor::{DiagramEditor, EditorConfig, MAX_SCALE, MIN_SCALE, Mode, Pending, SCALE_STEP, Tool};
pub use error::EditorError;
pub use history::HistoryStack;
pub use input::{InputEvent, Modifiers, PointerId};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use store::{ElementStore, Snapshot, StoreError};
