//! 操作提示音
//!
//! add/delete/move 之后触发提示音，抽象为注入的通知接口，
//! 由表现层持有。播放失败一律吞掉，绝不影响底层数据操作。

use std::io::Write;

/// 触发通知的任务事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    Added,
    Deleted,
    Moved,
}

/// 通知接口（fire-and-forget，无返回值）
pub trait Notifier {
    fn notify(&self, event: TaskEvent);
}

/// 终端响铃实现
pub struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify(&self, _event: TaskEvent) {
        // BEL 写入失败没有可行的补救，直接忽略
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// 静默实现（`--quiet` 或测试环境）
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _event: TaskEvent) {}
}

#[cfg(test)]
pub mod test_support {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Notifier, TaskEvent};

    /// 记录收到事件的测试替身
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        pub events: Rc<RefCell<Vec<TaskEvent>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, event: TaskEvent) {
            self.events.borrow_mut().push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingNotifier;
    use super::*;

    #[test]
    fn test_recording_notifier_collects_events() {
        let notifier = RecordingNotifier::default();
        notifier.notify(TaskEvent::Added);
        notifier.notify(TaskEvent::Moved);
        assert_eq!(
            *notifier.events.borrow(),
            vec![TaskEvent::Added, TaskEvent::Moved]
        );
    }

    #[test]
    fn test_silent_notifier_is_noop() {
        SilentNotifier.notify(TaskEvent::Deleted);
    }
}
