//! The six entity kinds served by the application
//!
//! | kind      | route             | status lookup        |
//! |-----------|-------------------|----------------------|
//! | User      | `/api/user`       | `active` flag        |
//! | Product   | `/api/product`    | `active` flag        |
//! | Category  | `/api/category`   | `active` flag        |
//! | Order     | `/api/order`      | `status` field       |
//! | OrderItem | `/api/order-item` | none, returns all    |
//! | Review    | `/api/review`     | none, returns all    |

pub mod macros;

pub mod category;
pub mod order;
pub mod order_item;
pub mod product;
pub mod review;
pub mod user;

pub use category::{CategoryDto, CategoryEntity, CategoryMapper, CategoryRecord};
pub use order::{OrderDto, OrderEntity, OrderMapper, OrderRecord};
pub use order_item::{OrderItemDto, OrderItemEntity, OrderItemMapper, OrderItemRecord};
pub use product::{ProductDto, ProductEntity, ProductMapper, ProductRecord};
pub use review::{ReviewDto, ReviewEntity, ReviewMapper, ReviewRecord};
pub use user::{UserDto, UserEntity, UserMapper, UserRecord};
