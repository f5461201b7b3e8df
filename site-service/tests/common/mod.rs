use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use http_body_util::BodyExt;
use site_service::domain::booking::models::BookingRequest;
use site_service::domain::booking::models::BookingStatus;
use site_service::domain::booking::models::BookingWithService;
use site_service::domain::booking::ports::BookingRepository;
use site_service::domain::catalog::models::Service;
use site_service::domain::catalog::models::ServiceUpdate;
use site_service::domain::catalog::ports::ServiceRepository;
use site_service::domain::contact::models::ContactInfo;
use site_service::domain::contact::models::ContactMessage;
use site_service::domain::contact::models::MessageStatus;
use site_service::domain::contact::ports::ContactInfoRepository;
use site_service::domain::contact::ports::ContactMessageRepository;
use site_service::domain::errors::RepositoryError;
use site_service::domain::gallery::models::GalleryImage;
use site_service::domain::gallery::ports::GalleryRepository;
use site_service::domain::review::models::Review;
use site_service::domain::review::models::ReviewWithAuthor;
use site_service::domain::review::ports::ReviewRepository;
use site_service::domain::review::service::ReviewService;
use site_service::domain::slider::models::Slider;
use site_service::domain::slider::models::SliderUpdate;
use site_service::domain::slider::ports::SliderRepository;
use site_service::domain::user::models::EmailAddress;
use site_service::domain::user::models::Role;
use site_service::domain::user::models::User;
use site_service::domain::user::models::UserId;
use site_service::domain::user::ports::UserRepository;
use site_service::domain::user::service::AuthService;
use site_service::inbound::http::router::create_router;
use site_service::inbound::http::router::AppState;
use tower::ServiceExt;
use uuid::Uuid;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(user.email.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryServiceRepository {
    services: Mutex<Vec<Service>>,
}

impl InMemoryServiceRepository {
    fn find_name(&self, id: Uuid) -> Option<String> {
        let services = self.services.lock().unwrap();
        services.iter().find(|s| s.id == id).map(|s| s.name.clone())
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn list_active(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().filter(|s| s.is_active).cloned().collect())
    }

    async fn create(&self, service: Service) -> Result<Service, RepositoryError> {
        let mut services = self.services.lock().unwrap();
        services.push(service.clone());
        Ok(service)
    }

    async fn update(
        &self,
        id: Uuid,
        update: ServiceUpdate,
    ) -> Result<Option<Service>, RepositoryError> {
        let mut services = self.services.lock().unwrap();
        let Some(service) = services.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            service.name = name;
        }
        if let Some(description) = update.description {
            service.description = description;
        }
        if let Some(price) = update.price {
            service.price = price;
        }
        if let Some(unit) = update.unit {
            service.unit = unit;
        }
        if let Some(image_url) = update.image_url {
            service.image_url = Some(image_url);
        }
        if let Some(is_active) = update.is_active {
            service.is_active = is_active;
        }
        Ok(Some(service.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut services = self.services.lock().unwrap();
        let before = services.len();
        services.retain(|s| s.id != id);
        Ok(services.len() < before)
    }
}

#[derive(Default)]
pub struct InMemorySliderRepository {
    sliders: Mutex<Vec<Slider>>,
}

#[async_trait]
impl SliderRepository for InMemorySliderRepository {
    async fn list(&self) -> Result<Vec<Slider>, RepositoryError> {
        let mut sliders = self.sliders.lock().unwrap().clone();
        sliders.sort_by_key(|s| s.position);
        Ok(sliders)
    }

    async fn create(&self, slider: Slider) -> Result<Slider, RepositoryError> {
        let mut sliders = self.sliders.lock().unwrap();
        sliders.push(slider.clone());
        Ok(slider)
    }

    async fn update(
        &self,
        id: Uuid,
        update: SliderUpdate,
    ) -> Result<Option<Slider>, RepositoryError> {
        let mut sliders = self.sliders.lock().unwrap();
        let Some(slider) = sliders.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            slider.title = title;
        }
        if let Some(description) = update.description {
            slider.description = description;
        }
        if let Some(image_url) = update.image_url {
            slider.image_url = image_url;
        }
        if let Some(position) = update.position {
            slider.position = position;
        }
        if let Some(is_active) = update.is_active {
            slider.is_active = is_active;
        }
        Ok(Some(slider.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut sliders = self.sliders.lock().unwrap();
        let before = sliders.len();
        sliders.retain(|s| s.id != id);
        Ok(sliders.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryGalleryRepository {
    images: Mutex<Vec<GalleryImage>>,
}

#[async_trait]
impl GalleryRepository for InMemoryGalleryRepository {
    async fn list(&self) -> Result<Vec<GalleryImage>, RepositoryError> {
        let mut images = self.images.lock().unwrap().clone();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(images)
    }

    async fn create(&self, image: GalleryImage) -> Result<GalleryImage, RepositoryError> {
        let mut images = self.images.lock().unwrap();
        images.push(image.clone());
        Ok(image)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut images = self.images.lock().unwrap();
        let before = images.len();
        images.retain(|i| i.id != id);
        Ok(images.len() < before)
    }
}

pub struct InMemoryReviewRepository {
    reviews: Mutex<Vec<Review>>,
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryReviewRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            reviews: Mutex::new(Vec::new()),
            users,
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, RepositoryError> {
        let mut reviews = self.reviews.lock().unwrap();
        if reviews.iter().any(|r| r.user_id == review.user_id) {
            return Err(RepositoryError::Conflict(review.user_id.to_string()));
        }
        reviews.push(review.clone());
        Ok(review)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Review>, RepositoryError> {
        let reviews = self.reviews.lock().unwrap();
        Ok(reviews.iter().find(|r| r.user_id == *user_id).cloned())
    }

    async fn list_with_authors(&self) -> Result<Vec<ReviewWithAuthor>, RepositoryError> {
        let mut reviews = self.reviews.lock().unwrap().clone();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut joined = Vec::with_capacity(reviews.len());
        for review in reviews {
            let author = self
                .users
                .find_by_id(&review.user_id)
                .await?
                .ok_or_else(|| RepositoryError::Database("author missing".to_string()))?;
            joined.push(ReviewWithAuthor {
                id: review.id,
                rating: review.rating.value(),
                comment: review.comment.as_str().to_string(),
                created_at: review.created_at,
                author_name: author.name,
                author_email: author.email.as_str().to_string(),
            });
        }
        Ok(joined)
    }
}

pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<BookingRequest>>,
    services: Arc<InMemoryServiceRepository>,
}

impl InMemoryBookingRepository {
    pub fn new(services: Arc<InMemoryServiceRepository>) -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
            services,
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: BookingRequest) -> Result<BookingRequest, RepositoryError> {
        let mut bookings = self.bookings.lock().unwrap();
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_with_services(&self) -> Result<Vec<BookingWithService>, RepositoryError> {
        let mut bookings = self.bookings.lock().unwrap().clone();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings
            .into_iter()
            .map(|booking| {
                let service_name = self.services.find_name(booking.service_id);
                BookingWithService {
                    booking,
                    service_name,
                }
            })
            .collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<BookingRequest>, RepositoryError> {
        let mut bookings = self.bookings.lock().unwrap();
        let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        booking.status = status;
        Ok(Some(booking.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryContactInfoRepository {
    info: Mutex<Option<ContactInfo>>,
}

#[async_trait]
impl ContactInfoRepository for InMemoryContactInfoRepository {
    async fn get(&self) -> Result<Option<ContactInfo>, RepositoryError> {
        Ok(self.info.lock().unwrap().clone())
    }

    async fn upsert(&self, info: ContactInfo) -> Result<ContactInfo, RepositoryError> {
        *self.info.lock().unwrap() = Some(info.clone());
        Ok(info)
    }
}

#[derive(Default)]
pub struct InMemoryContactMessageRepository {
    messages: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn create(&self, message: ContactMessage) -> Result<ContactMessage, RepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        messages.push(message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let mut messages = self.messages.lock().unwrap().clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactMessage>, RepositoryError> {
        let messages = self.messages.lock().unwrap();
        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> Result<Option<ContactMessage>, RepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let Some(message) = messages.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        message.status = status;
        Ok(Some(message.clone()))
    }
}

/// The full application wired against in-memory stores, driven in-process.
pub struct TestApp {
    router: Router,
    pub authenticator: Arc<Authenticator>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn spawn() -> Self {
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));
        let users = Arc::new(InMemoryUserRepository::default());
        let services = Arc::new(InMemoryServiceRepository::default());
        let reviews = Arc::new(InMemoryReviewRepository::new(Arc::clone(&users)));

        let state = AppState {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&users) as Arc<dyn UserRepository>,
                Arc::clone(&authenticator),
            )),
            review_service: Arc::new(ReviewService::new(
                Arc::clone(&reviews) as Arc<dyn ReviewRepository>
            )),
            authenticator: Arc::clone(&authenticator),
            services: Arc::clone(&services) as Arc<dyn ServiceRepository>,
            sliders: Arc::new(InMemorySliderRepository::default()),
            gallery: Arc::new(InMemoryGalleryRepository::default()),
            bookings: Arc::new(InMemoryBookingRepository::new(Arc::clone(&services))),
            contact_info: Arc::new(InMemoryContactInfoRepository::default()),
            contact_messages: Arc::new(InMemoryContactMessageRepository::default()),
        };

        Self {
            router: create_router(state),
            authenticator,
            users,
        }
    }

    /// Insert an admin directly into the store and mint their token, the
    /// same way an operator would promote an account out of band.
    pub async fn seed_admin(&self, email: &str, password: &str) -> String {
        let hash = self
            .authenticator
            .hash_password(password)
            .expect("Failed to hash password");
        let mut user = User::new(
            "Admin".to_string(),
            EmailAddress::new(email.to_string()).expect("Invalid email"),
            hash,
        );
        user.role = Role::Admin;

        let user = self.users.create(user).await.expect("Failed to seed admin");

        self.authenticator
            .generate_token(&auth::Claims::new(user.id, user.email.as_str(), user.role))
            .expect("Failed to mint admin token")
    }

    /// Register a fresh user through the API and return their token.
    pub async fn register_user(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({
                    "name": "Customer",
                    "email": email,
                    "password": password
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
        body["data"]["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request("GET", path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn put(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("PUT", path, token, Some(body)).await
    }

    pub async fn patch(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("PATCH", path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request("DELETE", path, token, None).await
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response was not valid JSON")
        };

        (status, body)
    }
}
