//! Page-level container wiring the list, the drag layer and the actions.
//!
//! Create, toggle and delete wait for the store and then reload the list;
//! only reordering is applied before the store answers.

use tracing::{debug, info};
use uuid::Uuid;

use crate::actions::{ActionResult, TodoActions};
use crate::drag::{DragEnd, DragLayer, Step};
use crate::list::{ReorderOutcome, TodoList};
use crate::render::{ItemIntent, ListView};
use crate::transport::Transport;

/// Where user-facing notifications go.
pub trait Notifier {
    /// Shows a message the user has to acknowledge.
    fn alert(&mut self, message: &str);

    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

pub struct TodoPage<T, N> {
    actions: TodoActions<T>,
    list: TodoList,
    drag: DragLayer,
    notifier: N,
}

impl<T: Transport, N: Notifier> TodoPage<T, N> {
    pub fn new(actions: TodoActions<T>, notifier: N) -> Self {
        Self {
            actions,
            list: TodoList::new(),
            drag: DragLayer::new(),
            notifier,
        }
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn drag_layer(&self) -> &DragLayer {
        &self.drag
    }

    pub fn actions(&self) -> &TodoActions<T> {
        &self.actions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn view(&self) -> ListView {
        ListView::build(&self.list, &self.drag, self.actions.messages())
    }

    /// Fetches the list from the store and replaces the working sequence.
    pub fn load(&mut self) -> ActionResult {
        let todos = self.notify(|page| page.actions.list())?;
        self.list.initialize(&todos);
        self.drag.sync(self.list.items());
        debug!(count = todos.len(), "list loaded");
        Ok(())
    }

    /// Host signal that the rendered rows are attached.
    pub fn on_mounted(&mut self) {
        self.drag.on_mounted();
    }

    /// Form submission.
    pub fn submit(&mut self, title: &str) -> ActionResult {
        self.notify(|page| page.actions.create(title))?;
        self.load()
    }

    /// Runs a toggle or delete intent and reloads on success. A delete the
    /// user declines to confirm sends nothing.
    pub fn apply(&mut self, intent: ItemIntent) -> ActionResult {
        if let ItemIntent::Delete { id } = intent {
            let question = self.actions.messages().confirm_delete;
            if !self.notifier.confirm(question) {
                debug!(%id, "delete declined");
                return Ok(());
            }
        }
        self.notify(|page| page.actions.dispatch(intent))?;
        self.load()
    }

    /// Pointer down on an item's handle. Refused while a reorder is pending.
    pub fn drag_start(&mut self, id: Uuid) -> bool {
        if self.list.is_reordering() {
            return false;
        }
        self.drag.start(id)
    }

    /// Pointer released over `over` (or outside every item).
    pub fn drag_end(&mut self, over: Option<Uuid>) -> ReorderOutcome {
        match self.drag.finish(over) {
            Some(gesture) => self.reorder(gesture),
            None => ReorderOutcome::Ignored,
        }
    }

    pub fn drag_cancel(&mut self) {
        self.drag.cancel();
    }

    /// Keyboard reordering of the focused item.
    pub fn keyboard_step(&mut self, id: Uuid, step: Step) -> ReorderOutcome {
        match self.drag.step(id, step) {
            Some(gesture) => self.reorder(gesture),
            None => ReorderOutcome::Ignored,
        }
    }

    fn reorder(&mut self, gesture: DragEnd) -> ReorderOutcome {
        let outcome = self.list.handle_drag_end(gesture, &self.actions);
        match &outcome {
            ReorderOutcome::Reverted(err) => self.notifier.alert(err.message()),
            ReorderOutcome::Confirmed => {
                self.drag.sync(self.list.items());
                info!(dragged = %gesture.dragged, "reorder confirmed");
            }
            ReorderOutcome::Ignored | ReorderOutcome::Busy => {}
        }
        outcome
    }

    /// Runs `op`, alerting the user with the message if it fails.
    fn notify<R>(&mut self, op: impl FnOnce(&Self) -> ActionResult<R>) -> ActionResult<R> {
        op(&*self).inspect_err(|err| self.notifier.alert(err.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ActionError;
    use crate::http::HttpMethod;
    use crate::testing::{json, todo, ScriptedTransport};

    #[derive(Default)]
    struct Recorder {
        alerts: Vec<String>,
        answer: bool,
        questions: Vec<String>,
    }

    impl Notifier for Recorder {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn confirm(&mut self, message: &str) -> bool {
            self.questions.push(message.to_string());
            self.answer
        }
    }

    fn page(transport: ScriptedTransport, answer: bool) -> TodoPage<ScriptedTransport, Recorder> {
        let actions = TodoActions::new(&ClientConfig::new("http://store"), transport);
        TodoPage::new(
            actions,
            Recorder {
                answer,
                ..Recorder::default()
            },
        )
    }

    fn titles(page: &TodoPage<ScriptedTransport, Recorder>) -> Vec<String> {
        page.list().items().iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn load_failure_alerts_and_keeps_list() {
        let mut page = page(ScriptedTransport::new().respond(500, ""), true);
        assert!(page.load().is_err());
        assert_eq!(page.notifier().alerts, ["Failed to load todos"]);
        assert!(page.list().is_empty());
    }

    #[test]
    fn blank_submit_alerts_without_request() {
        let mut page = page(ScriptedTransport::new(), true);
        let err = page.submit("  ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(page.notifier().alerts, ["Please enter a title"]);
        assert!(page.actions().transport().requests().is_empty());
    }

    #[test]
    fn submit_reloads_after_create() {
        let a = todo(1, "A");
        let transport = ScriptedTransport::new()
            .respond(201, serde_json::to_string(&a).unwrap())
            .respond(200, json(&[a.clone()]));
        let mut page = page(transport, true);

        page.submit("A").unwrap();

        assert_eq!(titles(&page), ["A"]);
        let methods: Vec<HttpMethod> = page.actions().transport().requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, [HttpMethod::Post, HttpMethod::Get]);
    }

    #[test]
    fn toggle_failure_leaves_list_untouched() {
        let a = todo(1, "A");
        let transport = ScriptedTransport::new()
            .respond(200, json(&[a.clone()]))
            .respond(500, "");
        let mut page = page(transport, true);
        page.load().unwrap();

        let err = page.apply(ItemIntent::Toggle { id: a.id, completed: true }).unwrap_err();

        assert_eq!(err, ActionError::Failed("Failed to update todo".to_string()));
        assert!(!page.list().items()[0].completed);
        assert_eq!(page.notifier().alerts, ["Failed to update todo"]);
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let a = todo(1, "A");
        let mut page = page(ScriptedTransport::new().respond(200, json(&[a.clone()])), false);
        page.load().unwrap();

        page.apply(ItemIntent::Delete { id: a.id }).unwrap();

        assert_eq!(page.notifier().questions, ["Delete this todo?"]);
        assert_eq!(page.actions().transport().requests().len(), 1);
        assert_eq!(titles(&page), ["A"]);
    }

    #[test]
    fn confirmed_delete_reloads() {
        let (a, b) = (todo(1, "A"), todo(2, "B"));
        let transport = ScriptedTransport::new()
            .respond(200, json(&[a.clone(), b.clone()]))
            .respond(204, "")
            .respond(200, json(&[b.clone()]));
        let mut page = page(transport, true);
        page.load().unwrap();

        page.apply(ItemIntent::Delete { id: a.id }).unwrap();

        assert_eq!(titles(&page), ["B"]);
        assert_eq!(page.actions().transport().remaining(), 0);
    }

    #[test]
    fn drag_before_mount_is_ignored() {
        let (a, b) = (todo(1, "A"), todo(2, "B"));
        let mut page = page(ScriptedTransport::new().respond(200, json(&[a.clone(), b.clone()])), true);
        page.load().unwrap();

        assert!(!page.drag_start(a.id));
        assert_eq!(page.drag_end(Some(b.id)), ReorderOutcome::Ignored);
        assert_eq!(titles(&page), ["A", "B"]);
    }

    #[test]
    fn rejected_drag_reverts_and_alerts() {
        let (a, b) = (todo(1, "A"), todo(2, "B"));
        let transport = ScriptedTransport::new()
            .respond(200, json(&[a.clone(), b.clone()]))
            .respond(409, "");
        let mut page = page(transport, true);
        page.load().unwrap();
        page.on_mounted();

        assert!(page.drag_start(b.id));
        let outcome = page.drag_end(Some(a.id));

        assert!(matches!(outcome, ReorderOutcome::Reverted(_)));
        assert_eq!(titles(&page), ["A", "B"]);
        assert_eq!(page.notifier().alerts, ["Failed to save the new order"]);
    }

    #[test]
    fn keyboard_step_reorders() {
        let (a, b) = (todo(1, "A"), todo(2, "B"));
        let transport = ScriptedTransport::new()
            .respond(200, json(&[a.clone(), b.clone()]))
            .respond(200, "");
        let mut page = page(transport, true);
        page.load().unwrap();
        page.on_mounted();

        assert_eq!(page.keyboard_step(a.id, Step::Down), ReorderOutcome::Confirmed);
        assert_eq!(titles(&page), ["B", "A"]);
        assert_eq!(page.view().lines(), ["⠿ [ ] B", "⠿ [ ] A"]);
    }
}
