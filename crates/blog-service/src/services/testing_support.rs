//! In-memory repositories for service unit tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use blog_common::auth::{hash_password, JwtService};
use blog_core::entities::{
    Blog, Comment, Like, LikeCounts, LikeDetails, LikeStatus, LikeTarget, PasswordRecovery, Post,
    Session, User,
};
use blog_core::traits::{
    BlogQuery, BlogRepository, CommentRepository, LikeRepository, Mailer, MaintenanceRepository,
    PostRepository, RepoResult, SessionRepository, UserQuery, UserRepository,
};
use blog_core::{DomainError, Page, PageQuery, Snowflake, SnowflakeGenerator};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Tables {
    users: HashMap<Snowflake, User>,
    sessions: HashMap<Uuid, Session>,
    blogs: HashMap<Snowflake, Blog>,
    posts: HashMap<Snowflake, Post>,
    comments: HashMap<Snowflake, Comment>,
    likes: HashMap<(Snowflake, LikeTarget), Like>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

fn paginate<T: Clone>(mut items: Vec<T>, created: impl Fn(&T) -> DateTime<Utc>, query: &PageQuery) -> Page<T> {
    items.sort_by_key(|item| std::cmp::Reverse(created(item)));
    let total = items.len() as i64;
    let page = items
        .into_iter()
        .skip(query.offset() as usize)
        .take(query.limit() as usize)
        .collect();
    Page::new(page, total, query)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.get(&id).cloned())
    }

    async fn find_by_login_or_email(&self, login_or_email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .lock()
            .users
            .values()
            .find(|u| u.login == login_or_email || u.email == login_or_email)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_confirmation_code(&self, code: Uuid) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .lock()
            .users
            .values()
            .find(|u| u.email_confirmation.code == code)
            .cloned())
    }

    async fn login_exists(&self, login: &str) -> RepoResult<bool> {
        Ok(self.tables.lock().users.values().any(|u| u.login == login))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.tables.lock().users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.users.values().any(|u| u.login == user.login) {
            return Err(DomainError::LoginAlreadyExists);
        }
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn confirm_email(&self, code: Uuid, now: DateTime<Utc>) -> RepoResult<Option<Snowflake>> {
        let mut tables = self.tables.lock();
        Ok(tables
            .users
            .values_mut()
            .find(|u| u.email_confirmation.code == code)
            .and_then(|u| u.confirm(code, now).then_some(u.id)))
    }

    async fn update_confirmation_code(
        &self,
        id: Snowflake,
        code: Uuid,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        if let Some(user) = self.tables.lock().users.get_mut(&id) {
            user.email_confirmation.code = code;
            user.email_confirmation.expires_at = expires_at;
        }
        Ok(())
    }

    async fn set_recovery_code(
        &self,
        id: Snowflake,
        code: Uuid,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()> {
        if let Some(user) = self.tables.lock().users.get_mut(&id) {
            user.password_recovery = Some(PasswordRecovery { code, expires_at });
        }
        Ok(())
    }

    async fn reset_password(
        &self,
        code: Uuid,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<Snowflake>> {
        let mut tables = self.tables.lock();
        let user = tables.users.values_mut().find(|u| {
            u.password_recovery
                .as_ref()
                .is_some_and(|r| r.code == code && !r.is_expired(now))
        });
        Ok(user.map(|u| {
            u.password_hash = password_hash.to_string();
            u.password_recovery = None;
            u.id
        }))
    }

    async fn find_page(&self, query: &UserQuery) -> RepoResult<Page<User>> {
        let login = query.search_login_term.as_ref().map(|t| t.to_lowercase());
        let email = query.search_email_term.as_ref().map(|t| t.to_lowercase());
        let users = self
            .tables
            .lock()
            .users
            .values()
            .filter(|u| match (&login, &email) {
                (None, None) => true,
                (l, e) => {
                    l.as_ref().is_some_and(|t| u.login.to_lowercase().contains(t))
                        || e.as_ref().is_some_and(|t| u.email.to_lowercase().contains(t))
                }
            })
            .cloned()
            .collect();
        Ok(paginate(users, |u: &User| u.created_at, &query.page))
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        tables.sessions.retain(|_, s| s.user_id != id);
        let authored: Vec<Snowflake> = tables
            .comments
            .values()
            .filter(|c| c.author_id == id)
            .map(|c| c.id)
            .collect();
        tables.comments.retain(|_, c| c.author_id != id);
        tables.likes.retain(|(user_id, target), _| {
            *user_id != id && !authored.iter().any(|c| *target == LikeTarget::Comment(*c))
        });
        Ok(tables.users.remove(&id).is_some())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, session: &Session) -> RepoResult<()> {
        self.tables.lock().sessions.insert(session.device_id, session.clone());
        Ok(())
    }

    async fn find_by_token_key(
        &self,
        user_id: Snowflake,
        token_key: Uuid,
    ) -> RepoResult<Option<Session>> {
        let now = Utc::now();
        Ok(self
            .tables
            .lock()
            .sessions
            .values()
            .find(|s| s.user_id == user_id && s.token_key == token_key && !s.is_expired(now))
            .cloned())
    }

    async fn find_by_device(&self, device_id: Uuid) -> RepoResult<Option<Session>> {
        Ok(self.tables.lock().sessions.get(&device_id).cloned())
    }

    async fn find_active_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Session>> {
        let now = Utc::now();
        Ok(self
            .tables
            .lock()
            .sessions
            .values()
            .filter(|s| s.user_id == user_id && !s.is_expired(now))
            .cloned()
            .collect())
    }

    async fn rotate(&self, previous_key: Uuid, rotated: &Session) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        match tables.sessions.get_mut(&rotated.device_id) {
            Some(current) if current.token_key == previous_key => {
                *current = rotated.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn exists(&self, user_id: Snowflake, token_key: Uuid) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .sessions
            .values()
            .any(|s| s.user_id == user_id && s.token_key == token_key))
    }

    async fn delete_by_token_key(&self, token_key: Uuid) -> RepoResult<()> {
        self.tables.lock().sessions.retain(|_, s| s.token_key != token_key);
        Ok(())
    }

    async fn delete_by_device(&self, device_id: Uuid) -> RepoResult<bool> {
        Ok(self.tables.lock().sessions.remove(&device_id).is_some())
    }

    async fn delete_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let mut tables = self.tables.lock();
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| s.user_id != user_id);
        Ok((before - tables.sessions.len()) as u64)
    }
}

#[async_trait]
impl BlogRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        Ok(self.tables.lock().blogs.get(&id).cloned())
    }

    async fn find_page(&self, query: &BlogQuery) -> RepoResult<Page<Blog>> {
        let term = query.search_name_term.as_ref().map(|t| t.to_lowercase());
        let blogs = self
            .tables
            .lock()
            .blogs
            .values()
            .filter(|b| term.as_ref().is_none_or(|t| b.name.to_lowercase().contains(t)))
            .cloned()
            .collect();
        Ok(paginate(blogs, |b: &Blog| b.created_at, &query.page))
    }

    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        self.tables.lock().blogs.insert(blog.id, blog.clone());
        Ok(())
    }

    async fn update(&self, blog: &Blog) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        match tables.blogs.get_mut(&blog.id) {
            Some(stored) => {
                *stored = blog.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        tables.posts.retain(|_, p| p.blog_id != id);
        Ok(tables.blogs.remove(&id).is_some())
    }
}

impl Tables {
    fn hydrate_post(&self, post: &Post) -> Post {
        let mut post = post.clone();
        if let Some(blog) = self.blogs.get(&post.blog_id) {
            post.blog_name = blog.name.clone();
        }
        post
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let tables = self.tables.lock();
        Ok(tables.posts.get(&id).map(|p| tables.hydrate_post(p)))
    }

    async fn find_page(&self, blog_id: Option<Snowflake>, query: &PageQuery) -> RepoResult<Page<Post>> {
        let tables = self.tables.lock();
        let posts = tables
            .posts
            .values()
            .filter(|p| blog_id.is_none_or(|id| p.blog_id == id))
            .map(|p| tables.hydrate_post(p))
            .collect();
        Ok(paginate(posts, |p: &Post| p.created_at, query))
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.tables.lock().posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        match tables.posts.get_mut(&post.id) {
            Some(stored) => {
                *stored = post.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        tables.comments.retain(|_, c| c.post_id != id);
        Ok(tables.posts.remove(&id).is_some())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.tables.lock().comments.get(&id).cloned())
    }

    async fn find_by_post(&self, post_id: Snowflake, query: &PageQuery) -> RepoResult<Page<Comment>> {
        let comments = self
            .tables
            .lock()
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        Ok(paginate(comments, |c: &Comment| c.created_at, query))
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.tables.lock().comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn update_content(&self, id: Snowflake, content: &str) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        Ok(tables
            .comments
            .get_mut(&id)
            .map(|c| c.content = content.to_string())
            .is_some())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tables = self.tables.lock();
        tables.likes.retain(|(_, target), _| *target != LikeTarget::Comment(id));
        Ok(tables.comments.remove(&id).is_some())
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn set_status(&self, like: &Like) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let key = (like.user_id, like.target);
        if like.is_removal() {
            tables.likes.remove(&key);
        } else if tables.likes.get(&key).is_none_or(|l| l.status != like.status) {
            tables.likes.insert(key, like.clone());
        }
        Ok(())
    }

    async fn statuses_of(
        &self,
        user_id: Snowflake,
        targets: &[LikeTarget],
    ) -> RepoResult<HashMap<LikeTarget, LikeStatus>> {
        let tables = self.tables.lock();
        Ok(targets
            .iter()
            .filter_map(|target| {
                let like = tables.likes.get(&(user_id, *target))?;
                Some((*target, like.status))
            })
            .collect())
    }

    async fn counts(&self, targets: &[LikeTarget]) -> RepoResult<HashMap<LikeTarget, LikeCounts>> {
        let tables = self.tables.lock();
        let mut counts: HashMap<LikeTarget, LikeCounts> = HashMap::new();
        for like in tables.likes.values().filter(|l| targets.contains(&l.target)) {
            let entry = counts.entry(like.target).or_default();
            match like.status {
                LikeStatus::Like => entry.likes += 1,
                LikeStatus::Dislike => entry.dislikes += 1,
                LikeStatus::None => {}
            }
        }
        Ok(counts)
    }

    async fn newest_likes(
        &self,
        targets: &[LikeTarget],
        limit: i64,
    ) -> RepoResult<HashMap<LikeTarget, Vec<LikeDetails>>> {
        let tables = self.tables.lock();
        let mut newest = HashMap::new();
        for target in targets {
            let mut likes: Vec<&Like> = tables
                .likes
                .values()
                .filter(|l| l.target == *target && l.status == LikeStatus::Like)
                .collect();
            if likes.is_empty() {
                continue;
            }
            likes.sort_by_key(|l| std::cmp::Reverse(l.updated_at));
            let details: Vec<LikeDetails> = likes
                .into_iter()
                .take(limit as usize)
                .map(|l| LikeDetails {
                    user_id: l.user_id,
                    login: tables
                        .users
                        .get(&l.user_id)
                        .map(|u| u.login.clone())
                        .unwrap_or_default(),
                    added_at: l.updated_at,
                })
                .collect();
            newest.insert(*target, details);
        }
        Ok(newest)
    }
}

#[async_trait]
impl MaintenanceRepository for MemoryStore {
    async fn clear_all(&self) -> RepoResult<()> {
        *self.tables.lock() = Tables::default();
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Mailer that remembers the last code sent to each address
#[derive(Default)]
pub struct RecordingMailer {
    confirmations: Mutex<HashMap<String, Uuid>>,
    recoveries: Mutex<HashMap<String, Uuid>>,
}

impl RecordingMailer {
    pub fn last_confirmation(&self, email: &str) -> Option<Uuid> {
        self.confirmations.lock().get(email).copied()
    }

    pub fn last_recovery(&self, email: &str) -> Option<Uuid> {
        self.recoveries.lock().get(email).copied()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_confirmation_code(&self, email: &str, code: Uuid) -> RepoResult<()> {
        self.confirmations.lock().insert(email.to_string(), code);
        Ok(())
    }

    async fn send_recovery_code(&self, email: &str, code: Uuid) -> RepoResult<()> {
        self.recoveries.lock().insert(email.to_string(), code);
        Ok(())
    }
}

pub struct Fakes {
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
}

/// Build a context wired to fresh in-memory fakes
pub fn test_context() -> (ServiceContext, Fakes) {
    let store = Arc::new(MemoryStore::default());
    let mailer = Arc::new(RecordingMailer::default());

    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .session_repo(store.clone())
        .blog_repo(store.clone())
        .post_repo(store.clone())
        .comment_repo(store.clone())
        .like_repo(store.clone())
        .maintenance_repo(store.clone())
        .mailer(mailer.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret", 600, 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .expect("complete test context");

    (ctx, Fakes { store, mailer })
}

/// Insert a confirmed user whose password is `secret1`
pub async fn confirmed_user(ctx: &ServiceContext, _fakes: &Fakes, login: &str) -> User {
    let user = User::new_confirmed(
        ctx.generate_id(),
        login.to_string(),
        format!("{login}@example.com"),
        hash_password("secret1").expect("hash"),
    );
    ctx.user_repo().create(&user).await.expect("insert user");
    user
}
