mod enums;

/// Ai generation types
pub mod ai;
/// Error body types
pub mod error;
/// Fraction types
pub mod fraction;
/// Internal and moderation types
pub mod internal;
/// Item and market types
pub mod items;
/// Player types
pub mod player;
/// Server types
pub mod server;
/// Token types
pub mod token;

pub use self::{
    ai::AiResponse,
    enums::{
        EstateHistoryType,
        EstateType,
        Gender,
        ModifiedBy,
        Nation,
        OverrideKind,
        OverrideStatus,
        PrivacyPlatform,
        PunishType,
        RatingType,
        SSFont,
        StatResponseType,
        UnknownVariantError,
    },
    error::{
        LocationItem,
        ValidationError,
    },
    fraction::{
        DeputiesResponse,
        DeputyEntry,
        InterviewEntry,
        InterviewsResponse,
        LeaderEntry,
        LeadersResponse,
        MembersPlayer,
        MembersRecord,
        MembersResponse,
        PlayerEntry,
        PlayersResponse,
    },
    internal::{
        AdminEntry,
        AdminsReport,
        AdminsResponse,
        BotAccount,
        BotDetectionResponse,
        CheckRpManualOverrideEntry,
        CheckRpManualOverridesListResponse,
        CheckRpOverrideRequest,
        DeputiesReport,
        EstateReport,
        InterviewsReport,
        LeadersReport,
        MapReport,
        MembersReport,
        PlayersReport,
        RatingReport,
        ServerStatusReport,
        ShopReport,
        ShopsReport,
    },
    items::{
        ItemEntry,
        ItemHistoryEntry,
        ItemMarketStatsResponse,
        ItemsHistoryResponse,
        ItemsResponse,
        MarketHistoryPoint,
        MarketItemStats,
        ShopEntry,
        ShopItem,
        ShopsResponse,
    },
    player::{
        AdminInfo,
        CalendarDayEntry,
        CheckRpNameData,
        CheckRpResponse,
        FindPlayerResponse,
        IndividualAccounts,
        MoneyHistoryEntry,
        NicknameHistoryEntry,
        OnlineEntry,
        OnlineResponse,
        PlayerCalendarResponse,
        PlayerFraction,
        PlayerGeneral,
        PlayerLvl,
        PlayerMoney,
        PlayerPunishes,
        PlayerRatingEntry,
        PlayerSessionEntry,
        PlayerSessionsResponse,
        PlayerVip,
        PlayerViewEntry,
        PlayerViewsResponse,
        PrivacyToggleRequest,
        RpNickResponse,
        ServerInfo,
    },
    server::{
        AuctionInfo,
        BusinessEntry,
        Coordinates,
        CrossServerRatingResponse,
        EstateHistoryEntry,
        EstateHistoryResponse,
        EstateResponse,
        GraphPoint,
        HouseEntry,
        MapResponse,
        PunishEntry,
        PunishesResponse,
        Rating,
        RatingPlayer,
        RatingResponse,
        ServerOnlineHistoryResponse,
        ServerStatus,
        ServerStatusResponse,
        TerritoriesCount,
    },
    token::{
        CreateTokenRequest,
        RequestLogEntry,
        RequestLogResponse,
        RequestStatsResponse,
        TokenResponse,
        TokenStat,
        UpdateTokenRequest,
    },
};
