use tracing::{debug, info, instrument};

use crate::domain::{Member, MemberCreate};
use crate::error::MemberError;
use crate::store::MemoryStore;

/// Registration and lookup for members.
pub struct MemberService {
    store: MemoryStore<Member>,
}

impl MemberService {
    pub fn new(store: MemoryStore<Member>) -> Self {
        Self { store }
    }

    /// Registers a new member. Member names are unique across the system.
    #[instrument(skip(self))]
    pub fn join(&mut self, params: MemberCreate) -> Result<u64, MemberError> {
        if self.store.iter().any(|m| m.name == params.name) {
            return Err(MemberError::AlreadyExists(params.name));
        }
        let id = self.store.create(params);
        info!(member_id = id, "Member joined");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub fn find_member(&self, id: u64) -> Result<&Member, MemberError> {
        debug!("Looking up member");
        self.store.get(&id).ok_or(MemberError::NotFound(id))
    }

    /// All registered members, in no particular order.
    #[allow(dead_code)]
    pub fn find_members(&self) -> Vec<&Member> {
        self.store.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Grade;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn member_service() -> MemberService {
        let seq = AtomicU64::new(1);
        MemberService::new(MemoryStore::new(move || seq.fetch_add(1, Ordering::SeqCst)))
    }

    #[test]
    fn join_then_find() {
        let mut service = member_service();
        let id = service
            .join(MemberCreate {
                name: "alice".into(),
                grade: Grade::Vip,
            })
            .unwrap();

        let member = service.find_member(id).unwrap();
        assert_eq!(member.name, "alice");
        assert_eq!(member.grade, Grade::Vip);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut service = member_service();
        service
            .join(MemberCreate {
                name: "alice".into(),
                grade: Grade::Basic,
            })
            .unwrap();

        let err = service
            .join(MemberCreate {
                name: "alice".into(),
                grade: Grade::Vip,
            })
            .unwrap_err();
        assert_eq!(err, MemberError::AlreadyExists("alice".into()));
        assert_eq!(service.find_members().len(), 1);
    }

    #[test]
    fn find_unknown_member_fails() {
        let service = member_service();
        assert_eq!(service.find_member(42), Err(MemberError::NotFound(42)));
    }
}
