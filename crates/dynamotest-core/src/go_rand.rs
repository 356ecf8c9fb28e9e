//! A port of the additive lagged Fibonacci source behind Go's `math/rand`.
//!
//! Seeded random table names are drawn from this source so that a seed gives
//! the same suffix as `rand.Seed(seed)` followed by `rand.Intn(52)` in Go.
//! Table names pinned by existing test suites keep their values.

const LEN: usize = 607;
const TAP: usize = 273;
const INT32_MAX: i64 = (1 << 31) - 1;
const INT63_MASK: u64 = (1 << 63) - 1;

/// Seed used in place of zero, which would leave the seeding sequence stuck.
const ZERO_SEED: i64 = 89_482_311;

/// Seeded state of a Go `rngSource`.
#[derive(Debug, Clone)]
pub(crate) struct GoRandSource {
    tap: usize,
    feed: usize,
    vec: [u64; LEN],
}

/// Park-Miller step used to spread the seed over the state vector.
fn seedrand(x: i64) -> i64 {
    const A: i64 = 48_271;
    const Q: i64 = 44_488;
    const R: i64 = 3_399;

    let hi = x / Q;
    let lo = x % Q;
    let x = A * lo - R * hi;
    if x < 0 { x + INT32_MAX } else { x }
}

impl GoRandSource {
    /// Equivalent of `rand.NewSource(seed)`.
    pub(crate) fn new(seed: i64) -> Self {
        let mut x = seed % INT32_MAX;
        if x < 0 {
            x += INT32_MAX;
        }
        if x == 0 {
            x = ZERO_SEED;
        }

        for _ in 0..20 {
            x = seedrand(x);
        }
        let mut vec = [0u64; LEN];
        for (slot, cooked) in vec.iter_mut().zip(COOKED) {
            x = seedrand(x);
            let mut u = x.unsigned_abs() << 40;
            x = seedrand(x);
            u ^= x.unsigned_abs() << 20;
            x = seedrand(x);
            u ^= x.unsigned_abs();
            *slot = u ^ cooked;
        }

        Self {
            tap: 0,
            feed: LEN - TAP,
            vec,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.tap = (self.tap + LEN - 1) % LEN;
        self.feed = (self.feed + LEN - 1) % LEN;
        let x = self.vec[self.feed].wrapping_add(self.vec[self.tap]);
        self.vec[self.feed] = x;
        x
    }

    fn int63(&mut self) -> u64 {
        self.next_u64() & INT63_MASK
    }

    fn int31(&mut self) -> u64 {
        self.int63() >> 32
    }

    /// Equivalent of `rand.Intn(n)` for `0 < n < 2^31`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn intn(&mut self, n: usize) -> usize {
        let n = n as u64;
        if n.is_power_of_two() {
            return (self.int31() & (n - 1)) as usize;
        }
        let max = (1 << 31) - 1 - (1 << 31) % n;
        let mut v = self.int31();
        while v > max {
            v = self.int31();
        }
        (v % n) as usize
    }
}

/// State of the source after 7.8e12 steps from seed 1. Every seeded source
/// starts from this vector.
#[rustfmt::skip]
const COOKED: [u64; LEN] = [
    0xC5F7_4A33_EB98_FFEA, 0xC07B_4A41_BA96_5F5B, 0x135E_C513_CB81_AF0F, 0x4A04_FB5C_A743_95EB,
    0xA7E8_831C_7710_CF8E, 0x7D5D_E4E8_8F37_C1C3, 0x6321_CF77_43FF_85A9, 0x42CB_0655_6A9F_F961,
    0x6E26_C8D1_40E8_D7D2, 0x49A7_511F_3411_FAA0, 0x71ED_7749_22A6_5055, 0x9D5C_9FC6_5FEA_2D5C,
    0x3FBD_AB39_4A01_4368, 0x70FA_3359_6992_340B, 0xAE10_FB4E_CEA6_6A02, 0xF79F_BCA9_8BBC_D18A,
    0x97F7_CCB1_2EA3_80AC, 0x0191_D794_CAF3_2B1B, 0x3F6A_3234_24E3_2CAF, 0xC642_CC92_1F01_142B,
    0xA122_869F_4FF3_8068, 0xA5B1_A311_27AF_3920, 0x5B07_A4F9_BDC2_9D96, 0x6A2A_973C_2981_2586,
    0x6AA4_33DB_F77A_52E1, 0x8394_216E_3B8A_C99E, 0xDB80_A9C5_515B_997C, 0x03C3_F2EF_F3CB_F769,
    0xA6B5_E431_EEFF_210C, 0x0EC8_5334_9929_53F5, 0x2E6A_1432_DF10_D1E9, 0xBDE4_6299_59D1_B149,
    0x6799_4C38_7638_7951, 0x0E15_D461_559B_AE63, 0xBDBF_96C4_E9D2_A077, 0xB04F_6286_6ADA_20F3,
    0x2190_DA16_46DB_97BF, 0x5071_873C_1832_957A, 0x3E3B_503A_19DA_904B, 0x33E3_88A5_F2C7_8528,
    0xBEC7_0BAC_19D0_E877, 0x0025_6970_F81B_F072, 0xF7D1_8A14_F64F_A886, 0xA46E_F978_B4D4_734C,
    0x782F_F157_3127_A78E, 0x0024_1B0A_D59B_EBA6, 0xDAC5_4959_1FE9_5B2F, 0x6195_FAF2_884C_2D39,
    0x569C_2BBD_B0EF_345D, 0x0B8B_6039_508C_E21E, 0xEF15_7670_5435_D2BB, 0x1D5E_900A_F5F1_D8F7,
    0x1E90_2D18_7D7F_D437, 0x7F22_7B7C_8FE0_EB79, 0x3879_0E62_01EB_BB98, 0x4481_8EAC_7922_E171,
    0x0658_D6C5_50DA_D340, 0x84BF_B894_CC72_969A, 0xA785_5141_E3B3_29BD, 0x9CB3_1556_B1BA_E746,
    0x3CA0_9004_F968_6F49, 0x0C50_146D_7E50_8769, 0xCD35_D8FF_935A_C970, 0xDE98_18B4_AA15_54D8,
    0x4DF3_7EFD_6433_DAA0, 0xF591_E9AD_05B2_E056, 0x1767_EB0B_DBF8_3E29, 0xB824_7292_5352_99F2,
    0xBAE6_4597_5A5E_4CEB, 0xECEA_7815_5C3B_C32B, 0x4E29_5E53_57AC_E86E, 0x8B90_6A9A_4FAD_BB08,
    0xFD50_086A_F644_63C9, 0xAD03_85AC_FD19_D6FC, 0xBBE6_D4A5_E1D1_3A9F, 0xFC09_9F33_B79B_039C,
    0xD978_2224_840C_5A35, 0x174E_38BC_45D5_1ACF, 0x53F8_2F9F_54DE_4E3E, 0xE10D_FA0A_87B3_EF0E,
    0xEA09_D9EC_7B43_9769, 0x519E_C3C7_CC4C_5011, 0x0B47_990F_C413_E3D5, 0x3F07_E07E_CFCE_5BE2,
    0xA5D2_D0B8_B719_22BE, 0x451E_EA1F_C87C_C761, 0xC850_5EDE_F7F1_D6DD, 0xFB6E_D78E_001C_E905,
    0xD7CC_0A36_44F4_68BA, 0x14C2_31DB_2E44_29D0, 0xE21C_CD9A_9094_3DD3, 0x6648_69F5_288F_C2D1,
    0xDDC5_6F60_4E16_8FB5, 0x4151_E4AB_B0B1_FAF6, 0xEC96_47E8_CEA7_B927, 0x76A7_4218_7DBE_61DE,
    0x8077_8D40_4978_0E3C, 0x9271_4446_C26C_E413, 0x6547_5BC0_19E7_700B, 0x0E08_781D_60D8_6D17,
    0x9F0F_0FE9_D5F5_71E0, 0x476E_62BF_3388_6E57, 0x8C71_0CFF_524E_B4E6, 0x24E8_56A5_9E38_99A5,
    0x549F_7C8B_5783_189A, 0x9808_539C_0602_0014, 0xB8FC_59EE_B251_5467, 0xF38F_FF8B_8499_A614,
    0xF5A6_2BE7_3A3D_5222, 0x508B_8283_2B4C_4838, 0xF510_9FC7_682F_F8DE, 0xD31C_ADF1_5CC5_3F0C,
    0xC172_0509_406B_5826, 0xE900_7152_10BC_96FA, 0x0704_FE35_36D3_93FB, 0xC65C_9B6E_CCAE_FB4A,
    0x8BAF_C730_92BE_4019, 0x07F0_B599_D778_89EA, 0x18DE_0A49_B8FA_589B, 0x2F17_4E71_C983_0FF0,
    0xB470_B780_A267_85DD, 0x20A6_B761_23B1_62BE, 0x91EF_BD24_CDC5_8322, 0xFB7B_B750_26B3_2623,
    0xD03D_1CAF_9A1F_04D0, 0xA5F0_F909_BCAE_E921, 0x46AA_7CED_9D1C_8E0B, 0xFCD8_A79E_7A62_B6F9,
    0x3AC4_CF05_BCE8_3F14, 0x45C5_79A0_08A0_37C4, 0x4053_888E_5279_12D0, 0xF88F_A0B2_289F_7B17,
    0x51FB_AF5D_2002_BDDA, 0x8AE4_03A8_12CA_4784, 0x0D7E_A237_329F_A450, 0xCB3F_04BF_02B6_F208,
    0xC796_643E_8A39_ED33, 0xFD92_D79E_D75B_6419, 0x2168_21C8_B258_E8AC, 0xE93D_3AFF_7B46_E931,
    0x36B0_858C_FCB7_2B6A, 0xAE5E_3C9F_E7FF_1167, 0x2AF4_C395_391C_C2A5, 0xE6C4_FD07_6FEB_7676,
    0x50EF_B5FB_31ED_E773, 0x6D7F_2433_59DB_FCAE, 0x7193_E740_340E_0FDB, 0x8FF5_1F73_A4C6_DD92,
    0x9453_4B6E_FA1C_A966, 0xC06A_7245_20D7_0D41, 0x30CD_16BD_1912_0592, 0x8D45_6B58_0C2C_D6DC,
    0x5C62_BC0D_6A84_29EF, 0x4874_4EA9_B8E9_395E, 0x18EF_1482_5C84_AEE1, 0x4A1E_32B7_3A71_E234,
    0x0FEE_6F27_C452_28C0, 0x464E_2E3B_E0D2_E4A1, 0x23BB_67F4_82E1_6008, 0x0F11_B541_E824_7327,
    0xAE7D_F90C_7D2A_AFD7, 0x54E1_F496_142C_391A, 0x1D40_0EF6_25FA_4274, 0x9906_9666_10CE_9E13,
    0x2245_5934_D7C1_CCDA, 0xE641_4239_B7DA_9220, 0xB49F_9091_F627_5556, 0x8291_6B3D_6428_8ABD,
    0x9F52_D0A1_C706_6FA0, 0x642A_666C_FB8C_F0A1, 0x8C9D_981D_B063_AD83, 0x63DF_A261_58B6_7E4A,
    0xCE3C_FE36_EBEC_C2DF, 0xB6E4_EB2B_A553_64FF, 0x6FD2_179E_0D77_17D1, 0xB971_A2B7_3622_47DB,
    0xDBE5_CF25_D510_C53B, 0x930F_28AD_7373_5261, 0x5A95_DD01_047F_EB8B, 0x30AD_B140_7358_B45A,
    0x7FB4_4776_784C_1083, 0x1B20_E8F4_EB07_5406, 0xDC27_5F40_B6C7_C0D9, 0x732D_F8DD_A67B_0F27,
    0xB626_37AF_C484_C885, 0x61C9_8649_838B_F631, 0xDF06_1FEE_3027_7F58, 0x95D3_2205_2DAC_1455,
    0x7AD3_0486_E478_AEE9, 0x3267_221F_4ACE_D145, 0x4798_0705_2C35_66B8, 0xA802_5350_A77E_A0B9,
    0x421A_7EC2_FC16_9CD3, 0x5727_3AB0_5129_A700, 0xBAE4_F7FB_719F_43F2, 0x1C5B_D857_E8B8_BF48,
    0xDAD5_9418_6971_F359, 0x3F51_8AAD_9C42_7014, 0x4C43_C3B8_CC8E_8218, 0x981F_BA56_6F92_DFB7,
    0x07AC_AAC5_5435_C0AC, 0x5FB0_8810_38CB_BC8F, 0xF243_B555_6CBE_BA73, 0x6314_9F30_3BE7_9FD4,
    0xF6AA_DE43_1F71_2475, 0x4CD2_A557_B6CB_C24B, 0x21BC_6975_C169_DE72, 0xCAF7_8CF4_0C76_8134,
    0xF13C_DD62_4A12_159F, 0xD573_D004_1B39_0D3E, 0x69EA_8BD9_3BAD_E806, 0x578B_AF3D_78CD_61F2,
    0x3318_A93A_7F68_9DC9, 0x2DA7_501C_BDBE_5235, 0x5B6D_448C_9BB1_1200, 0x0365_66CA_66F2_31B4,
    0xB89E_51E9_E2B7_37E4, 0x7046_8754_1C9B_68CF, 0x28DF_28A3_5D29_37C9, 0x8BFE_B275_6944_B0B5,
    0x29C2_4143_C223_4E9C, 0xF4FD_794F_8D02_068F, 0x0590_F068_DF15_E57D, 0xE4AD_98AD_AB8D_C009,
    0x4155_B182_8194_A406, 0xCE46_3027_D4FF_743F, 0xD306_2311_68EC_0845, 0xAE01_9849_86C0_C339,
    0xCC61_9836_5698_0E5A, 0xB6B4_B212_AF3D_051A, 0x70AA_F14A_706C_E17A, 0x3547_CBC9_95DE_3A40,
    0x6202_B8D9_E9E8_565F, 0x8A49_EA18_1DDB_AC34, 0x53A7_BCB9_2853_CE41, 0xA2AA_1325_46A1_6F3A,
    0xD6C1_6663_4BC9_2862, 0x92FF_6ACE_BC93_A071, 0x7A40_3280_A96C_EA51, 0x5A18_3B8F_8166_5A24,
    0x222B_4C80_D2C0_E464, 0x859E_3D4D_58BA_3AA6, 0xB9A2_8389_CB2F_E563, 0x83A2_0CB8_9512_FEE4,
    0xCBD6_91B0_61B3_0CBD, 0x8839_BAF8_F3AC_9F09, 0x5DDF_03B3_EDD1_C4B8, 0xF626_94C4_CB82_ED09,
    0xD0C6_03B9_879B_D360, 0x8558_DAF7_8042_6657, 0xC87F_DB1B_629E_32AB, 0xD779_38D5_1686_2FE1,
    0xE33A_5696_2759_EC00, 0x051B_C82F_174B_90D9, 0xAB3B_5DEB_CAD2_5C86, 0xA876_6BD0_DD9B_35DB,
    0x425F_26B6_83CA_1487, 0x5D3C_2B40_A076_F653, 0x7464_E98A_72F8_D634, 0x2F02_DD3E_EA4E_7841,
    0x4097_7FE8_4252_7877, 0xFBF0_1AD4_922B_1D62, 0xCA95_9C2A_8B4E_EA29, 0x69CA_7CA1_1053_3802,
    0x6B36_4963_5724_7BD9, 0x7F7C_0764_5CA7_B232, 0xB8C6_3FA5_0AE3_677B, 0xA0B7_FD74_7039_47D8,
    0x231F_B1A0_DC8C_E079, 0x16B6_3342_B7C9_6E77, 0xCD39_A909_D7E6_8027, 0x1427_685B_19CA_ECDD,
    0x9C9C_6CD2_8E91_B74D, 0x91C1_FB79_0E0D_3A54, 0x7E67_D3BD_B81B_B611, 0xD396_FC0D_89F6_E211,
    0x457E_ACFB_B049_EB22, 0x1DE1_979B_F565_4DD5, 0x5D43_6CA7_585D_28CA, 0xD3D7_E286_3218_D979,
    0x2FA7_BE3C_CF9D_1645, 0x1FB7_A7E1_7B9E_CCB0, 0x2B2B_1FCE_D929_C282, 0xD85A_9037_5E64_310D,
    0xCB33_6A16_1122_7DBD, 0x6369_25F5_BAF8_70CD, 0x43E0_D025_4B84_715E, 0x080E_C575_7721_9247,
    0x175E_E40F_58FB_D971, 0x3D78_CC36_5BAD_BCE1, 0x8495_A076_8390_3295, 0x8F89_C0D3_396A_3B53,
    0x639B_A81C_88D8_88A6, 0x3FAF_8D9C_775C_A781, 0xEAC4_0D3F_519D_2893, 0x01FE_31D8_C7DF_7DC4,
    0x036D_8003_387D_D6DB, 0x8C06_21F7_6822_0A97, 0x59D6_A8CC_7A08_2707, 0x2AEA_572A_F846_7560,
    0x1C91_0136_C9FD_F9C3, 0xC73E_DDFE_1113_85E2, 0x79ED_B9A2_A6A3_87DF, 0xD556_D17A_DCC5_F6FB,
    0xF727_09F9_6B28_A3C7, 0x552D_69F0_428D_CE6A, 0x9CBB_B4BE_9A92_C216, 0x4F37_AEF6_CAF4_1C5D,
    0xD343_1110_CDD7_A998, 0x3C7C_1DE5_B3CC_1DCA, 0x0483_11A7_625E_ABD9, 0x5EE4_1CB4_0CA8_1E2C,
    0x4338_5B68_E51D_BFFC, 0xD36A_1F70_D4F9_A2FF, 0xCAEA_CCB9_27B0_CB5C, 0x3FDD_AE41_63E0_10E4,
    0x0E7F_5452_A8C9_1EE0, 0x7E61_3154_5897_0CCB, 0x8B82_1C0B_1005_4C75, 0xC444_CF11_F984_0608,
    0x2536_B7A7_602F_6B4D, 0x3317_86D5_A126_F97F, 0xC9A9_CD70_8372_DB93, 0xD7E7_5A07_5424_51DA,
    0xA4E5_A10D_2865_9104, 0x9024_EBCB_F8B8_E6AF, 0x0813_7C33_80F3_2523, 0x32A3_1118_A95E_425F,
    0xBD64_0B61_4080_2B1E, 0x967E_3CD0_F12B_1C5F, 0x0310_89E8_7FBA_B9A7, 0xF11B_FBB3_BA3E_0841,
    0x3B7F_C3AD_0D1C_D36B, 0xBFB2_F4D9_68B7_59C3, 0x4C84_7556_4905_D202, 0xE0A8_0B2A_6236_FA83,
    0x86A5_B867_1A83_3AE3, 0x7960_8828_EB8F_E58D, 0x032B_CB9F_5721_E717, 0x12D2_24E5_DC7E_16DE,
    0x29E6_8B82_51E0_D495, 0x2BC0_4A75_08CB_08A3, 0x85F8_35A6_4832_9D25, 0x4D27_99F7_97EC_19A8,
    0x443A_ADC0_76F2_ED10, 0x8935_7DE2_77E4_6717, 0xAF79_07AE_B63C_9D6C, 0x27CE_6BE0_04DB_5B35,
    0x9BBF_0228_D95B_F1D8, 0xAE31_E17B_25E1_B363, 0x23E9_429E_957D_B925, 0x950E_5FAB_3C7E_6825,
    0x2AEA_3671_BF9F_5933, 0xB2D2_EF43_3932_102C, 0x0D7E_D21E_C77F_C8C1, 0xEA5F_1280_F48E_6247,
    0x17B7_47CD_F311_AE42, 0xE001_060E_A9FA_838E, 0xACA7_508C_5BCC_FC84, 0xA3AA_A084_3F04_F963,
    0xF949_F7A4_E8EB_D3A5, 0x2287_6BDE_FD41_DF6C, 0xC124_724F_07E6_9E7C, 0xBF47_0DF2_3D5A_A6B4,
    0x2998_3520_99F5_90B8, 0x11CC_90F4_5895_653D, 0x0355_0DA1_AB28_F8D1, 0x7842_CC5C_2B1B_34DB,
    0x08B7_9B36_94AC_8400, 0xBF72_D50B_84F9_6E2C, 0x9470_79F8_EB08_F590, 0x696C_B721_8205_0872,
    0xD488_5BC9_AC36_D5A7, 0x6CB8_88B5_79FE_97E1, 0x6294_8210_5204_E4FD, 0x3CEF_7908_16B9_3701,
    0xBDA7_7A26_BE13_6556, 0xFB8F_8613_14DD_A828, 0x08A2_B7B8_03AE_5BCF, 0xD3C8_A91E_D032_3140,
    0x8700_01A0_B867_EC3E, 0xE4F6_C1F9_B093_DDE5, 0x8E08_6BEC_BC0B_8378, 0x9E75_5197_C06F_FCC7,
    0x2467_05EE_34F2_04F8, 0xC792_7582_D516_264C, 0xB3E1_7BA4_7546_133C, 0xA33F_111B_5CAA_B4E2,
    0xA23D_8E16_1443_255E, 0x48F1_28B3_44D0_819C, 0x6CD1_22FB_39AB_204D, 0x5C29_10BF_238F_36AA,
    0x90AE_AC10_E05F_9BBA, 0x9D54_B6B0_0FE4_2ACA, 0xE88F_6438_7A0F_CDCB, 0xC45A_205F_0147_3609,
    0xC768_ED8E_B6B8_C82D, 0xF225_920D_43FD_23AC, 0x25BD_AD5A_8A81_7964, 0x7EBC_9CEF_B901_5AAB,
    0x3C1E_E78F_A4EA_733D, 0xE30E_85D1_7579_22A4, 0x6112_3DC5_E081_FE21, 0xDC86_C110_7967_4E66,
    0x8918_973F_B91A_B9FB, 0x00D4_EE55_CA6D_8C2A, 0xD500_476D_5215_B5B5, 0xFC50_68B3_E2EA_6D2A,
    0x205D_A910_DD23_CB85, 0x979B_5E11_369F_775B, 0x2BC8_7274_7D65_EAD7, 0x96BA_83AA_2AC1_9DE7,
    0xA225_8710_D3A0_6BD5, 0x02BC_FBD9_1693_43E7, 0x88EE_CD99_246B_6273, 0x234B_301B_2D3C_0302,
    0x3C61_095D_0931_ECBF, 0xC1FB_EAE2_53E4_4498, 0x9BF8_D56E_39D2_8810, 0xEF02_5E32_7585_2770,
    0x3B81_D83B_C6A5_B26D, 0x740E_3AF1_7358_A76B, 0x5A04_9161_0C21_7837, 0xB234_C04E_E970_7BBA,
    0xE8D6_7481_CF12_C324, 0x3DC1_A807_12DE_14DF, 0x9646_CD05_6265_E405, 0xC9ED_5B85_FE5D_E223,
    0xC034_E630_9514_CA00, 0xA55C_B1A9_EA35_E9BD, 0x8358_5DAC_1418_CF4C, 0xC6BF_E6B6_7AE7_1DFA,
    0xEDDE_6A80_9584_1598, 0x8C47_8074_A661_08D3, 0x49F4_FB28_4926_01C4, 0x6C1F_1E9A_65E7_ACB8,
    0x44C3_F220_E0A3_A35F, 0xC442_2797_AC16_0D7E, 0xA9BE_D55A_11AD_2C15, 0x29BD_BE2C_DE52_AC8D,
    0xA248_6ED0_1638_FB0C, 0x7BE9_1FDD_8FA2_5058, 0x6D06_C94A_2118_CF50, 0xBE19_F2B9_FCB6_49E5,
    0x6DA3_10D0_DDEF_E702, 0x9DB4_D619_7FE7_6870, 0xA1A8_E96D_D484_EB63, 0xA280_3DFD_82F8_5916,
    0x3A1A_0A44_D764_4C46, 0x1A25_188B_B552_AA62, 0xFA3E_AB18_C620_BD11, 0x33D2_4F4E_DD10_EA99,
    0x386D_3925_6536_CC6C, 0x607E_759E_FB2B_A1E8, 0x921E_BB3D_7C6C_6071, 0x96BA_6B08_8F86_692F,
    0xB2BD_2AEA_EAFE_D279, 0xB70C_C2DE_F3AB_10AC, 0x2B1C_1284_B0B6_DB2B, 0xD7D4_C4DB_5BBD_FF92,
    0x3F5B_8190_A0A0_241E, 0x1B79_F645_7E60_CFAE, 0xA05C_318C_9418_1E91, 0x3480_A671_B033_E3D5,
    0x7579_955E_FBBA_A755, 0x2777_C9F6_D0C6_B0D7, 0x2A0F_21C2_F666_2C43, 0xC286_B4BC_4586_9BBC,
    0x3DE2_66B1_C86E_D249, 0x0596_478E_E809_42C5, 0x6FD3_618B_2EE6_AE1B, 0x3F08_073A_3E5D_EA77,
    0x0E78_47D0_1D6E_71AF, 0xCD1F_81AF_C4FB_AAFE, 0x24BE_71C6_0778_C940, 0x1DC2_B6DF_046A_9621,
    0xD094_4E93_950F_6CCF, 0xE2C7_6704_1EA3_4007, 0x521B_F9C9_2065_76C6, 0x866B_7A2B_D771_5E51,
    0x7A97_753C_8C79_3641, 0x52DA_AC19_784A_65E4, 0x07D3_110B_7C73_F7EB, 0xA66B_273F_BCC4_29B7,
    0x1630_2DC8_5A75_540A, 0xC840_D370_0A56_E4DE, 0xD687_5303_FCD0_5BFF, 0xABBE_ED06_A5E3_2588,
    0x758A_6526_F863_6A3A, 0x01BE_7ADA_E8E6_2038, 0xC9B4_BEC7_5BC4_F40A, 0xDC7A_69CE_0A9F_C1C3,
    0xF93F_853C_0ADB_AA64, 0xBE48_B865_8E39_D5B6, 0x5233_CC88_F307_CB85, 0x81F4_8C56_6746_E404,
    0xE6E7_2B2F_3E11_1192, 0x6EE3_AD5D_7B43_33D5, 0x3BEB_F80A_BF44_E35E, 0x324F_3DFA_2996_372C,
    0xA609_00D5_84D3_294F, 0xCFB3_9707_D3E0_17C8, 0xD33C_D109_0A56_F237, 0xFAE1_7AC7_E560_5D43,
    0xC8C0_106F_0EAD_4419, 0x89BB_A803_7B2A_60BE, 0x6999_983C_12A6_557D, 0x29EC_B289_D4FC_6351,
    0xDC4E_3EC3_0888_8D22, 0x2492_188C_7C11_56A7, 0x4765_0278_1CF8_5A10, 0x8E5D_5DB3_B1C1_0B44,
    0x15BF_F662_3BA9_1EB7, 0x716A_28BB_A3F0_9C65, 0xD7F4_7607_C92F_30F1, 0x9E04_9078_3487_9DAD,
    0xA611_C597_95DB_7099, 0x9A74_C743_1575_8AA3, 0x536D_4C40_116F_3239, 0x5253_9AC5_87AD_97D0,
    0x1F1A_1675_F289_59C3, 0x8C6D_78F5_619E_8324, 0x2AF1_CFE5_63EF_F7AD, 0x3F9D_2212_E5C9_4B1D,
    0x7E02_3D46_7B37_B61F, 0xFAAB_76AD_ABEE_E96B, 0xCFF9_5DD9_926B_62D1, 0x3AA2_78A6_2172_DB76,
    0x9982_ABE5_19C8_C867, 0x34C2_118D_F1F5_857E, 0xFA73_76B6_4013_6C80, 0x98A7_D04C_A29A_DE2F,
    0x6D9F_14B0_4D77_E77E, 0x4B3D_AD04_8BED_47A1, 0x4C9E_E5E4_931D_3231, 0xBAF4_EBA5_43F3_3D0A,
    0x793A_AFA0_7373_D926, 0x986E_A60F_E6B3_9A32, 0xE31F_344F_6663_61E6, 0xF21C_BEDC_44C0_49CB,
    0xC4F7_52A0_EB5E_5403, 0xAF1B_99E2_7D41_0520, 0x5927_40A0_E5B8_C3DD, 0x04FC_4EA5_FB44_6C97,
    0xAD6E_587F_47AF_E7A6, 0xDE54_2C13_7B83_84A4, 0x2A0F_FC0F_7B30_1E5C, 0x8205_4730_0A5D_8AF4,
    0xD3C6_39C2_087D_C079, 0x0A46_7CA8_709A_2BB6, 0xE242_BB6B_B4DA_36DE, 0x6079_B053_1EC9_0376,
    0x058C_CF98_DC18_43F7, 0x8417_B417_B011_AEC1, 0xECDE_DD4F_F0DD_641B, 0x8C37_8728_2349_E832,
    0xD5F0_BB88_16E7_E8FB, 0x85B6_5048_0FD8_C2F4, 0x7D45_AA73_4F76_0B6D, 0x5962_4285_53D2_0814,
    0x400E_2BA0_1968_E7C4, 0x077E_19B9_A3F7_6000, 0x1D17_558F_6164_030C, 0x7975_3148_C0E6_C59F,
    0x9A77_D2F2_EF3B_D843, 0x666E_B88D_8701_E16F, 0x5572_E7CE_3428_8668, 0xEB8D_82B1_5491_D607,
    0x77C2_65A7_1AEB_BE54, 0x4947_DDDD_6F3E_9E07, 0x628D_FE63_5C79_5586, 0x2267_3E39_D43F_F99B,
    0x637E_086D_C78C_F522, 0xEE37_E366_9F7E_9C66, 0x92D7_BB47_A4AF_E838, 0x1F9E_ABDF_DBE2_B7BD,
    0x324F_CA6A_F2B5_C1D1, 0x59E4_A152_525B_1B29, 0x7C91_D10A_8D75_740E, 0xCC7C_533A_7FCA_95D8,
    0x1266_FBF7_7386_B1DB, 0x689A_66BA_46D1_C3BD, 0x4BD6_71B1_24B5_701A, 0x2C43_FD0A_9EAE_C04D,
    0x5814_3117_E4E1_6555, 0x8358_C5BB_1248_AC23, 0xAAF6_77BD_80E3_0AC5, 0xFC99_7227_A4F0_7F8F,
    0xA848_CC5D_9CB0_E150, 0x640A_711E_B0E4_9B41, 0x64FC_BFA0_1DCA_3978, 0x980A_AB2F_FF6B_C784,
    0x395C_6750_AA42_E65E, 0x287F_EA4C_9695_F3F4, 0x9516_3617_49F6_428A, 0xC977_D592_999F_2194,
    0xC451_66D9_F693_5FF8, 0xA7F5_03A2_8F43_1CA9, 0x51D3_A3C3_51BE_10EC, 0xF579_E080_1628_96E9,
    0xE5B5_E938_5B20_2824, 0xFBBA_1E4A_59B0_C60C, 0xA8DE_6558_29AA_B207, 0xE1DE_048D_C78B_382E,
    0x7453_5A96_CC7A_DFD7, 0x7E57_A19B_735E_F03B, 0x39A0_0A3A_31C0_25C6,
];
