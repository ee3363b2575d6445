//! Состояние модального просмотрщика, не зависящее от DOM.
//!
//! Все переходы синхронные. Отложенные завершения (появление, скрытие,
//! загрузка) несут [`TransitionTicket`] того действия, которое их запланировало;
//! завершение с устаревшим билетом игнорируется. Поэтому запоздавший таймер
//! закрытия не может спрятать окно, открытое после него.

/// Фаза жизненного цикла оверлея
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerPhase {
    Closed,
    /// Оверлей показан, анимация появления ещё не запущена
    Opening,
    Open,
    /// Подсостояние `Opening`/`Open`: ждём данные элемента.
    /// Не хранится, только возвращается из [`ViewerState::phase`].
    Loading,
    /// Анимация скрытия; оверлей ещё в DOM
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Откуда пришёл запрос на закрытие
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSource {
    CloseButton,
    Backdrop,
    EscapeKey,
}

/// Команда, в которую превращается нажатие клавиши
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Navigate(Direction),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    phase: ViewerPhase,
    current_index: usize,
    count: usize,
    is_loading: bool,
    generation: u64,
}

impl ViewerState {
    /// `count` - размер коллекции, он не меняется за время жизни страницы
    pub fn new(count: usize) -> Self {
        Self {
            phase: ViewerPhase::Closed,
            current_index: 0,
            count,
            is_loading: false,
            generation: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn phase(&self) -> ViewerPhase {
        match self.phase {
            ViewerPhase::Opening | ViewerPhase::Open if self.is_loading => ViewerPhase::Loading,
            phase => phase,
        }
    }

    /// Принимает ли просмотрщик ввод (навигация, Escape)
    pub fn is_open(&self) -> bool {
        matches!(self.phase, ViewerPhase::Opening | ViewerPhase::Open)
    }

    /// Оверлей присутствует на экране (в том числе во время скрытия)
    pub fn is_visible(&self) -> bool {
        self.phase != ViewerPhase::Closed
    }

    /// Для CSS-класса `show`, который запускает анимацию
    pub fn is_shown(&self) -> bool {
        self.phase == ViewerPhase::Open
    }

    pub fn current_ticket(&self) -> TransitionTicket {
        TransitionTicket(self.generation)
    }

    fn next_ticket(&mut self) -> TransitionTicket {
        self.generation += 1;
        TransitionTicket(self.generation)
    }

    /// Открывает элемент `index`. Пустая коллекция или индекс вне диапазона - no-op.
    ///
    /// Если окно уже открыто, фаза сохраняется: меняется только элемент и билет,
    /// класс `show` при переключении не снимается.
    pub fn open(&mut self, index: usize) -> Option<TransitionTicket> {
        if index >= self.count {
            return None;
        }
        self.current_index = index;
        if !self.is_open() {
            self.phase = ViewerPhase::Opening;
        }
        self.is_loading = false;
        Some(self.next_ticket())
    }

    /// Начинает скрытие. Повторный вызов во время скрытия или после - no-op.
    pub fn close(&mut self) -> Option<TransitionTicket> {
        if !self.is_open() {
            return None;
        }
        self.phase = ViewerPhase::Closing;
        self.is_loading = false;
        Some(self.next_ticket())
    }

    /// Индекс, на который перейдёт `navigate`, с заворотом по краям
    pub fn target_index(&self, direction: Direction) -> Option<usize> {
        if !self.is_open() || self.count == 0 {
            return None;
        }
        let count = self.count as isize;
        let next = (self.current_index as isize + direction.delta()).rem_euclid(count);
        Some(next as usize)
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<TransitionTicket> {
        let index = self.target_index(direction)?;
        self.open(index)
    }

    /// Завершает анимацию: `Opening -> Open`, `Closing -> Closed`.
    /// Возвращает `false`, если билет устарел или переходить некуда.
    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> bool {
        if ticket != self.current_ticket() {
            return false;
        }
        self.phase = match self.phase {
            ViewerPhase::Opening => ViewerPhase::Open,
            ViewerPhase::Closing => ViewerPhase::Closed,
            _ => return false,
        };
        true
    }

    pub fn begin_load(&mut self, ticket: TransitionTicket) -> bool {
        if ticket != self.current_ticket() || !self.is_open() {
            return false;
        }
        self.is_loading = true;
        true
    }

    /// `true`, если результат загрузки относится к текущему открытию и его надо показать
    pub fn finish_load(&mut self, ticket: TransitionTicket) -> bool {
        if ticket != self.current_ticket() || !self.is_loading {
            return false;
        }
        self.is_loading = false;
        true
    }

    pub fn key_command(&self, key: &str) -> Option<ViewerCommand> {
        if !self.is_open() {
            return None;
        }
        match key {
            "ArrowLeft" => Some(ViewerCommand::Navigate(Direction::Backward)),
            "ArrowRight" => Some(ViewerCommand::Navigate(Direction::Forward)),
            "Escape" => Some(ViewerCommand::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(count: usize, index: usize) -> ViewerState {
        let mut state = ViewerState::new(count);
        let ticket = state.open(index).unwrap();
        assert!(state.finish_transition(ticket));
        state
    }

    #[test]
    fn test_forward_cycle_returns_to_start() {
        for count in 1..=6 {
            for start in 0..count {
                let mut state = opened(count, start);
                for _ in 0..count {
                    state.navigate(Direction::Forward).unwrap();
                }
                assert_eq!(state.current_index(), start, "count={count} start={start}");
            }
        }
    }

    #[test]
    fn test_navigation_wraps_at_both_ends() {
        let mut state = opened(4, 0);
        state.navigate(Direction::Backward);
        assert_eq!(state.current_index(), 3);

        state.navigate(Direction::Forward);
        assert_eq!(state.current_index(), 0);

        let state = opened(1, 0);
        assert_eq!(state.target_index(Direction::Forward), Some(0));
        assert_eq!(state.target_index(Direction::Backward), Some(0));
    }

    #[test]
    fn test_open_on_empty_collection_is_noop() {
        let mut state = ViewerState::new(0);
        assert!(state.open(0).is_none());
        assert_eq!(state.phase(), ViewerPhase::Closed);
        assert!(state.navigate(Direction::Forward).is_none());
    }

    #[test]
    fn test_open_out_of_range_is_noop() {
        let mut state = ViewerState::new(3);
        assert!(state.open(3).is_none());
        assert_eq!(state.phase(), ViewerPhase::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = opened(3, 1);
        let ticket = state.close().unwrap();
        let after_first = state.clone();

        assert!(state.close().is_none());
        assert_eq!(state, after_first);

        assert!(state.finish_transition(ticket));
        assert_eq!(state.phase(), ViewerPhase::Closed);
        assert!(state.close().is_none());
        assert!(!state.is_visible());
    }

    #[test]
    fn test_phase_lifecycle() {
        let mut state = ViewerState::new(2);
        let ticket = state.open(1).unwrap();
        assert_eq!(state.phase(), ViewerPhase::Opening);
        assert!(state.is_visible());
        assert!(!state.is_shown());

        state.finish_transition(ticket);
        assert_eq!(state.phase(), ViewerPhase::Open);
        assert!(state.is_shown());

        let ticket = state.close().unwrap();
        assert_eq!(state.phase(), ViewerPhase::Closing);
        assert!(state.is_visible());
        assert!(!state.is_open());

        state.finish_transition(ticket);
        assert_eq!(state.phase(), ViewerPhase::Closed);
    }

    #[test]
    fn test_stale_close_does_not_hide_reopened_viewer() {
        let mut state = opened(3, 0);
        let close_ticket = state.close().unwrap();
        let open_ticket = state.open(2).unwrap();

        // таймер закрытия сработал уже после повторного открытия
        assert!(!state.finish_transition(close_ticket));
        assert_eq!(state.phase(), ViewerPhase::Opening);

        assert!(state.finish_transition(open_ticket));
        assert_eq!(state.phase(), ViewerPhase::Open);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let state = ViewerState::new(3);
        assert_eq!(state.key_command("Escape"), None);
        assert_eq!(state.key_command("ArrowLeft"), None);

        let mut closing = opened(3, 0);
        closing.close();
        assert_eq!(closing.key_command("Escape"), None);
    }

    #[test]
    fn test_key_mapping_while_open() {
        let state = opened(3, 0);
        assert_eq!(
            state.key_command("ArrowLeft"),
            Some(ViewerCommand::Navigate(Direction::Backward))
        );
        assert_eq!(
            state.key_command("ArrowRight"),
            Some(ViewerCommand::Navigate(Direction::Forward))
        );
        assert_eq!(state.key_command("Escape"), Some(ViewerCommand::Close));
        assert_eq!(state.key_command("Enter"), None);
    }

    #[test]
    fn test_captions_scenario() {
        let captions = ["A", "B", "C"];
        let mut state = ViewerState::new(captions.len());

        state.open(0);
        assert_eq!(captions[state.current_index()], "A");

        state.navigate(Direction::Forward);
        assert_eq!(captions[state.current_index()], "B");

        state.navigate(Direction::Backward);
        assert_eq!(captions[state.current_index()], "A");

        state.navigate(Direction::Backward);
        assert_eq!(captions[state.current_index()], "C");
    }

    #[test]
    fn test_loading_substate() {
        let mut state = ViewerState::new(2);
        let ticket = state.open(0).unwrap();
        assert!(state.begin_load(ticket));
        assert_eq!(state.phase(), ViewerPhase::Loading);

        state.finish_transition(ticket);
        assert_eq!(state.phase(), ViewerPhase::Loading);
        assert!(state.is_shown());

        assert!(state.finish_load(ticket));
        assert_eq!(state.phase(), ViewerPhase::Open);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_navigation_keeps_overlay_shown() {
        let mut state = opened(3, 0);

        let ticket = state.navigate(Direction::Forward).unwrap();
        assert_eq!(state.phase(), ViewerPhase::Open);
        assert!(state.is_shown());
        assert_eq!(state.current_index(), 1);

        // таймер появления от навигации ничего не меняет
        assert!(!state.finish_transition(ticket));
        assert!(state.is_shown());

        let ticket = state.navigate(Direction::Backward).unwrap();
        assert!(state.begin_load(ticket));
        assert!(state.is_shown());
        assert!(state.finish_load(ticket));
        assert_eq!(state.phase(), ViewerPhase::Open);
    }

    #[test]
    fn test_navigation_during_opening_still_reveals() {
        let mut state = ViewerState::new(3);
        let first = state.open(0).unwrap();
        let second = state.navigate(Direction::Forward).unwrap();
        assert_eq!(state.phase(), ViewerPhase::Opening);

        assert!(!state.finish_transition(first));
        assert!(state.finish_transition(second));
        assert!(state.is_shown());
    }

    #[test]
    fn test_failed_load_keeps_viewer_open() {
        let mut state = ViewerState::new(2);
        let ticket = state.open(1).unwrap();
        assert!(state.begin_load(ticket));
        state.finish_transition(ticket);

        // результат загрузки (в том числе ошибка) принимается, окно не закрывается
        assert!(state.finish_load(ticket));
        assert!(state.is_open());
        assert!(state.is_shown());
        assert!(!state.is_loading());
        assert_eq!(state.phase(), ViewerPhase::Open);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut state = ViewerState::new(3);
        let first = state.open(0).unwrap();
        state.begin_load(first);

        let second = state.navigate(Direction::Forward).unwrap();
        state.begin_load(second);

        assert!(!state.finish_load(first));
        assert!(state.is_loading());
        assert!(state.finish_load(second));
    }

    #[test]
    fn test_load_result_after_close_is_discarded() {
        let mut state = ViewerState::new(1);
        let ticket = state.open(0).unwrap();
        state.begin_load(ticket);
        state.close();

        assert!(!state.is_loading());
        assert!(!state.finish_load(ticket));
    }
}
