//! Closed literal sets for enum dimensions.
//!
//! These tables mirror the value domains the analytics backend accepts. A
//! filter literal outside its dimension's set is rejected before the query
//! ever leaves the process.

pub(super) const PAYMENT_GATEWAY: &[&str] = &[
    "INDUS_PAYU",
    "EPAYLATER",
    "GPAY_IMF",
    "TWOC_TWOP",
    "TATANEU",
    "ATOM",
    "MPGS",
    "YES_BIZ",
    "BOKU",
    "PAYFORT",
    "ADYEN",
    "EBS_V3",
    "HDFC",
    "SODEXO",
    "WORLDPAY",
    "CITRUS",
    "HYPER_PG",
    "HYPERPAY",
    "SHOPSE",
    "MERCHANT_CONTAINER",
    "SBI",
    "YESBANK_UPI",
    "TATAPAY",
    "LOANTAP",
    "HYPERPG",
    "TWID",
    "HDFC_UPI",
    "PAYGLOCAL",
    "RBL_BIZ",
    "AXIS_UPI",
    "CRED",
    "HDFCBANK_SMARTGATEWAY",
    "SIKA_SIMPL",
    "AIRPAY",
    "TABBY",
    "BHARATX",
    "SNAPMINT",
    "LOTUSPAY",
    "LINEPAY",
    "MOBIKWIK",
    "ITZCASH",
    "CAPITALFLOAT",
    "HDFC_CC_EMI",
    "TWID_V2",
    "STRIPE",
    "DUMMY",
    "EASEBUZZ",
    "ICICINB",
    "CAMSPAY",
    "HSBC_UPI",
    "PAYTM",
    "YPP",
    "CCAVENUE_V2",
    "PAYZAPP",
    "TATAPAYLATER",
    "CYBERSOURCE",
    "NOON",
    "PAYU",
    "CASH",
    "PINELABS",
    "PAY10",
    "LAZYPAY",
    "GOCASHFREE",
    "FREECHARGE",
    "AIRTELMONEY",
    "XENDIT",
    "PAYPAL",
    "RAZORPAY",
    "IPG",
    "FAWRYPAY",
    "PHONEPE",
    "TPSL",
    "GOOGLEPAY",
    "ZAAKPAY",
    "ICICI_UPI",
    "CAREEMPAY",
    "AMAZONPAY",
    "LSP",
    "BAJAJFINSERV",
    "NAVITAIRE",
    "CHECKOUT",
    "KBANK",
    "DIGIO",
    "MORPHEUS",
    "IATAPAY",
    "AMEX",
    "BILLDESK",
    "PAYTM_V2",
    "TATA_PA",
    "HDFCNB",
    "AIRWALLEX",
    "AXIS_BIZ",
    "SIMPL",
    "PINELABS_ONLINE",
];

pub(super) const TICKET_SIZE: &[&str] = &[
    "101-200", "201-300", ">1L", "1K-2K", "2K-5K", "0-100", "5K-10K", "501-1K", "10K-50K",
    "301-400", "401-500", "50K-1L",
];

pub(super) const ACTUAL_ORDER_STATUS: &[&str] = &[
    "COD_INITIATED",
    "AUTHORIZED",
    "AUTO_REFUNDED",
    "AUTHENTICATION_FAILED",
    "CAPTURE_INITIATED",
    "CAPTURE_FAILED",
    "AUTHORIZING",
    "VOIDED",
    "NEW",
    "SUCCESS",
    "PENDING_AUTHENTICATION",
    "AUTHORIZATION_FAILED",
    "PARTIAL_CHARGED",
    "JUSPAY_DECLINED",
    "TO_BE_CHARGED",
];

pub(super) const ACTUAL_PAYMENT_STATUS: &[&str] = &[
    "COD_INITIATED",
    "PENDING_VBV",
    "AUTHORIZED",
    "CHARGED",
    "FAILURE",
    "AUTHENTICATION_FAILED",
    "CAPTURE_INITIATED",
    "CAPTURE_FAILED",
    "AUTHORIZING",
    "VOIDED",
    "AUTO_REFUNDED",
    "VBV_SUCCESSFUL",
    "AUTHORIZATION_FAILED",
    "STARTED",
    "JUSPAY_DECLINED",
    "TO_BE_CHARGED",
];

pub(super) const ALLOWED_REQUEUE: &[i64] = &[0];

pub(super) const AUTH_TYPE: &[&str] = &["THREE_DS_2", "THREE_DS", "MOTO", "OTP", "THREE_DS2"];

pub(super) const CARD_BRAND: &[&str] = &[
    "CHINAUNIONPAY",
    "UNIONPAY",
    "DISCOVER",
    "RUPAY",
    "MAESTRO",
    "JCB",
    "DINERS",
    "MASTERCARD",
    "AMEX",
    "VISA",
    "SODEXO",
    "MADA",
    "BAJAJ",
];

pub(super) const CARD_TYPE: &[&str] = &[
    "RTP", "WALLET", "OTC", "REWARD", "DEBIT", "NB", "AADHAAR", "UPI", "CREDIT",
    "VIRTUAL_ACCOUNT",
];

pub(super) const EMI_TENURE: &[&str] = &["12", "48", "36", "24", "6", "0", "3", "18", "9"];

pub(super) const EMI_TYPE: &[&str] = &[
    "JUSPAY_NO_COST_EMI",
    "NO_COST_EMI",
    "STANDARD_EMI",
    "LOW_COST_EMI",
    "JUSPAY_NO_COST_EMI_SPLIT",
];

pub(super) const INDUSTRY: &[&str] = &[
    "NBFC",
    "Travel",
    "Education",
    "Food Delivery",
    "Others",
    "Hyperlocal",
    "Billpay",
    "EPharma",
    "TravelOrStay",
    "OTT",
    "eCommerce",
    "ERetail",
    "Ticketing",
    "Grocery Delivery",
    "Telecom / D2H",
    "Fintech",
    "Ticket Booking",
    "E-pharma",
    "Telecom",
    "Gaming",
    "Classified",
    "Investments",
    "Insurance",
];

pub(super) const IS_TOKEN_BIN: &[&str] = &["FALSE", "TRUE"];

pub(super) const MANDATE_FEATURE: &[&str] = &["DISABLED", "OPTIONAL", "REQUIRED"];

pub(super) const ORDER_SOURCE_OBJECT: &[&str] = &["PAYMENT_LINK", "PAYMENT_FORM"];

pub(super) const ORDER_SOURCE_OBJECT_ID: &[&str] = &[
    "pf_e2c79ac0e4",
    "45ded11c587a4d67b50540ce476a5c7d",
    "pf_6dd12b8acf",
    "pf_f5fad4b9d2",
    "DASHBOARD",
    "pf_59866c9894",
    "pf_5089b50928",
    "pf_a61ccef16d",
    "pf_4e821fe74a",
];

pub(super) const ORDER_STATUS: &[&str] = &["FAILURE", "SUCCESS", "PENDING"];

pub(super) const ORDER_TYPE: &[&str] = &[
    "MANDATE_PAYMENT",
    "ORDER_PAYMENT",
    "TPV_MANDATE_REGISTER",
    "TPV_PAYMENT",
    "MOTO_PAYMENT",
    "VAN_PAYMENT",
    "MANDATE_REGISTER",
    "TPV_MANDATE_PAYMENT",
];

pub(super) const OS: &[i64] = &[0];

pub(super) const PAYMENT_INSTRUMENT_GROUP: &[&str] = &[
    "CREDIT CARD",
    "RTP",
    "WALLET",
    "OTC",
    "REWARD",
    "NET BANKING",
    "CASH",
    "AADHAAR",
    "DEBIT CARD",
    "UPI",
    "VIRTUAL_ACCOUNT",
];

pub(super) const PAYMENT_METHOD_SUBTYPE: &[&str] = &[
    "TOKENIZATION_CONSENT_FALLBACK_TO_THREE_DS",
    "VAN_NB",
    "UPI_INAPP",
    "CRED_INTENT",
    "PG_FAILURE_FALLBACK_TO_THREE_DS",
    "PUSH_PAY",
    "AUTH_PROVIDER_FALLBACK_TO_THREE_DS",
    "UPI_PAY",
    "TXN_SUB_DETAIL",
    "DECIDER_FALLBACK_TO_THREE_DS",
    "UPI_COLLECT",
    "DIRECT_WALLET_DEBIT",
    "CUSTOMER_FALLBACK_TO_THREE_DS",
    "CRED_COLLECT",
    "MANDATE",
    "REDIRECT_WALLET_DEBIT",
    "PAYMENT_CHANNEL_FALLBACK_TO_THREE_DS",
    "UPI_QR",
];

pub(super) const PAYMENT_METHOD_TYPE: &[&str] = &[
    "RTP",
    "WALLET",
    "CARD",
    "OTC",
    "REWARD",
    "NB",
    "CASH",
    "AADHAAR",
    "CONSUMER_FINANCE",
    "MERCHANT_CONTAINER",
    "UPI",
    "VIRTUAL_ACCOUNT",
];

pub(super) const PAYMENT_STATUS: &[&str] = &["FAILURE", "SUCCESS", "PENDING"];

pub(super) const PLATFORM: &[&str] = &["ANDROID", "WEB:unknown", "MOBILE_WEB", "WEB", "IOS"];

// The prev_* and previous_* dimension pairs share one value domain each.
pub(super) const PREV_ORDER_STATUS: &[&str] = &[
    "AUTHORIZED",
    "AUTO_REFUNDED",
    "AUTHENTICATION_FAILED",
    "CAPTURE_INITIATED",
    "SUCCESS",
    "AUTHORIZING",
    "PENDING_AUTHENTICATION",
    "AUTHORIZATION_FAILED",
    "JUSPAY_DECLINED",
];

pub(super) const PREV_TXN_STATUS: &[&str] = &[
    "PENDING_VBV",
    "AUTHORIZED",
    "AUTHENTICATION_FAILED",
    "CAPTURE_INITIATED",
    "VOID_INITIATED",
    "AUTHORIZING",
    "VBV_SUCCESSFUL",
    "AUTHORIZATION_FAILED",
    "STARTED",
    "PENDING",
];

pub(super) const STATUS_SYNC_SOURCE: &[&str] = &[
    "TRANSACTION",
    "SN_FORCE_SYNC_V1",
    "START_PAY",
    "CRON_SYNC",
    "REDIRECTION",
    "PT_SYNC",
    "ASN_FORCE_SYNC_V1",
    "WEBHOOKS",
];

pub(super) const STORED_CARD_VAULT_PROVIDER: &[&str] = &[
    "ALT_ID",
    "ISSUER_CARD",
    "ISSUER_TOKEN",
    "NETWORK_TOKEN",
    "SODEXO",
];

pub(super) const TOKEN_REPEAT: &[&str] = &["FALSE", "TRUE"];

pub(super) const TOKENIZATION_ELIGIBILITY: &[&str] = &["Eligible", "NotEligible"];

pub(super) const TXN_CONFLICT: &[&str] = &["RESOLVED", "CONFLICTED", "MATCH"];

pub(super) const TXN_FLOW_TYPE: &[&str] = &[
    "QR",
    "DIRECT_DEBIT",
    "NET_BANKING",
    "NATIVE",
    "CARD_TRANSACTION",
    "INAPP_DEBIT",
    "COLLECT",
    "AADHAAR_PAY",
    "REDIRECT_DEBIT",
    "EMI",
    "CASH_PAY",
    "INTENT",
];

pub(super) const TXN_LATENCY_ENUM: &[&str] = &[
    "10M-1H", "1H-1D", "5M-6M", "9M-10M", "1M-2M", "1D-3D", "8M-9M", "4M-5M", "7M-8M", "3D-7D",
    "6M-7M", "3M-4M", "2M-3M", "0M-1M",
];

pub(super) const TXN_OBJECT_TYPE: &[&str] = &[
    "MANDATE_PAYMENT",
    "ORDER_PAYMENT",
    "TPV_EMANDATE_PAYMENT",
    "EMANDATE_REGISTER",
    "TPV_PAYMENT",
    "VAN_PAYMENT",
    "MANDATE_REGISTER",
    "EMANDATE_PAYMENT",
    "TPV_EMANDATE_REGISTER",
    "PARTIAL_CAPTURE",
];

pub(super) const TXN_SOURCE_OBJECT: &[&str] = &[
    "TOKENIZATION_CONSENT_FALLBACK_TO_THREE_DS",
    "VAN_NB",
    "UPI_INAPP",
    "CRED_INTENT",
    "PG_FAILURE_FALLBACK_TO_THREE_DS",
    "PUSH_PAY",
    "AUTH_PROVIDER_FALLBACK_TO_THREE_DS",
    "UPI_PAY",
    "TXN_SUB_DETAIL",
    "DECIDER_FALLBACK_TO_THREE_DS",
    "UPI_COLLECT",
    "DIRECT_WALLET_DEBIT",
    "CUSTOMER_FALLBACK_TO_THREE_DS",
    "CRED_COLLECT",
    "MANDATE",
    "REDIRECT_WALLET_DEBIT",
    "PAYMENT_CHANNEL_FALLBACK_TO_THREE_DS",
    "UPI_QR",
];

pub(super) const TXN_TYPE: &[&str] = &[
    "AUTH_AND_SETTLE",
    "PREAUTH_AND_SETTLE",
    "AUTH_AND_SPLIT_SETTLE",
];

pub(super) const UNIFIED_RESPONSE_CATEGORY: &[&str] = &[
    "",
    "USER_ERROR",
    "GENERIC_ERROR",
    "GATEWAY_VALIDATION_ERROR",
    "BUSINESS_ERROR",
    "VALIDATION_ERROR",
    "PAYMENT_FAILURE",
    "NOT_FOUND",
    "TECHNICAL_ERROR",
    "USER_DROPPED",
    "GATEWAY_ERROR",
    "UNKNOWN",
    "TXN_PENDING",
];

pub(super) const USER_OPT_IN: &[&str] = &["Consent Page Not Shown", "Skipped", "Approved"];

pub(super) const USING_TOKEN: &[&str] = &["True", "False"];

// Boolean dimensions come in two flavors: the full domain and the
// always-true flag the backend only ever materializes one way.
pub(super) const BOOL_ANY: &[bool] = &[false, true];
pub(super) const BOOL_TRUE_ONLY: &[bool] = &[true];
