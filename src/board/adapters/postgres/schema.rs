//! Diesel schema for board persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Unique project name.
        name -> Text,
        /// Free-form description.
        description -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Insertion sequence, breaks creation-time ties.
        seq -> Int8,
    }
}

diesel::table! {
    /// Task records owned by a project.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Free-form description.
        description -> Text,
        /// Workflow status.
        #[max_length = 16]
        status -> Varchar,
        /// Optional deadline.
        deadline -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Autoclose timestamp.
        closed_at -> Nullable<Timestamptz>,
        /// Insertion sequence, breaks creation-time ties.
        seq -> Int8,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
