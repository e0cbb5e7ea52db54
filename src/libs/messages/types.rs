use crate::libs::task::Priority;

#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuViewAll,
    MenuAddTask,
    MenuCompleteTask,
    MenuDeleteTask,
    MenuViewByPriority,
    MenuSearchTasks,
    MenuExit,
    PromptMenuChoice,
    Goodbye,

    // === TASK MESSAGES ===
    NoTasksFound,
    NoMatchingTasks,
    AllTasksHeader,
    PriorityTasksHeader(Priority),
    AllTasksByPriorityHeader,
    SearchResultsHeader(String), // term
    TaskDetailsHeader(i32),
    TaskAdded(String), // summary line
    DueDateDefaulted(String), // substituted date
    TaskCompleted(i32),
    TaskDeleted(String), // summary line
    TaskNotFound(i32),
    InvalidIdFormat(String),
    IdsExhausted,

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptDueDate,
    PromptSelectPriority,
    PromptCompleteId,
    PromptDeleteId,
    PromptPriorityView,
    PriorityViewAll,
    PromptSearchTerm,

    // === PERSISTENCE MESSAGES ===
    TasksLoadFailed(String), // error
    TasksSaveFailed(String), // error
    SaveSkipped(String),     // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigLoadFailed(String), // error
    PromptTasksFile,
    PromptDefaultDueDays,
}
