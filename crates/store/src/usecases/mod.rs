pub mod u501_pay_invoice;
