/// Membership tier. Determines whether a discount can apply at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Basic,
    Vip,
}

/// Represents a registered member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub grade: Grade,
}

/// Payload for registering a new member.
#[derive(Debug, Clone)]
pub struct MemberCreate {
    pub name: String,
    pub grade: Grade,
}

impl Member {
    /// Creates a new Member instance.
    ///
    /// # Notes
    /// The `id` field is initialized to 0 and will be set by the store on join.
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id: 0,
            name: name.into(),
            grade,
        }
    }
}

impl crate::store::Entity for Member {
    type Id = u64;
    type CreateParams = MemberCreate;

    fn id(&self) -> &u64 {
        &self.id
    }

    fn from_create_params(id: u64, params: MemberCreate) -> Self {
        Self {
            id,
            name: params.name,
            grade: params.grade,
        }
    }
}
