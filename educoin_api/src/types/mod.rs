mod amount;
pub use self::amount::{Amount, ParseAmountError};

mod center;
pub use self::center::{Center, CenterPayments, RecordId};

mod payment;
pub use self::payment::Payment;

mod checkout;
pub use self::checkout::{CheckoutRequest, CheckoutResponse};
