//! Compare after-tax income from a business run as a sole proprietorship or
//! as a corporation, under Korean income and corporation tax.

pub mod cmd;
pub mod money;
pub mod tax;
