//! Pow-of-10 block tables for the fixed- and exponential-precision
//! kernels.
//!
//! Generated offline from exact integer arithmetic.
//! `POW10_SPLIT[POW10_OFFSET[idx] + i]` holds
//! `⌈2^(16·idx + 120) / 10^(9i)⌉ mod (5^9 · 2^144)` and
//! `POW10_SPLIT_2[POW10_OFFSET_2[idx] + i - MIN_BLOCK_2[idx]]` holds
//! `⌈10^(9(i+1)) · 2^120 / 2^(16·idx)⌉ mod (5^9 · 2^144)`, three 64-bit
//! limbs each, little-endian. The reduction keeps every entry within
//! 192 bits; the discarded part is a multiple of `10^9 · 2^j` for every
//! shift `j` the kernels apply, so block digits are unaffected.

pub const POW10_ADDITIONAL_BITS: u32 = 120;

#[rustfmt::skip]
pub static POW10_OFFSET: [u16; 64] = [
    0, 2, 5, 8, 12, 16, 21, 26, 32, 39,
    46, 54, 62, 71, 80, 90, 100, 111, 122, 134,
    146, 159, 173, 187, 202, 217, 233, 249, 266, 283,
    301, 319, 338, 357, 377, 397, 418, 440, 462, 485,
    508, 532, 556, 581, 606, 632, 658, 685, 712, 740,
    769, 798, 828, 858, 889, 920, 952, 984, 1017, 1050,
    1084, 1118, 1153, 1188,
];

#[rustfmt::skip]
pub static POW10_SPLIT: [[u64; 3]; 1224] = [
    [0x0000000000000000, 0x0100000000000000, 0x0000000000000000],
    [0x09b5a52cb98b4055, 0x00000000044b82fa, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000000000100],
    [0xa52cb98b405447c5, 0x0000044b82fa09b5, 0x0000000000000000],
    [0x5dd1d243aba0e760, 0x0000000000001272, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000001000000],
    [0xb98b405447c4a982, 0x044b82fa09b5a52c, 0x0000000000000000],
    [0xd243aba0e75fe646, 0x0000000012725dd1, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001194d80000],
    [0x405447c4a98187ef, 0x82fa09b5a52cb98b, 0x000000000000044b],
    [0xaba0e75fe645cc49, 0x000012725dd1d243, 0x0000000000000000],
    [0x68dbc8f03f243bb0, 0x0000000000004f3a, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001c6a070000],
    [0x47c4a98187eebb23, 0x09b5a52cb98b4054, 0x00000000044b82fa],
    [0xe75fe645cc4873fa, 0x12725dd1d243aba0, 0x0000000000000000],
    [0xc8f03f243baf5133, 0x000000004f3a68db, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000c7d810000],
    [0xa98187eebb22f009, 0xa52cb98b405447c4, 0x0000001aa0c609b5],
    [0xe645cc4873f9e65b, 0x5dd1d243aba0e75f, 0x0000000000001272],
    [0x3f243baf513267ab, 0x00004f3a68dbc8f0, 0x0000000000000000],
    [0x4932d2e725a5bbcb, 0x0000000000015448, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000a69ce0000],
    [0x87eebb22f008d5d7, 0xb98b405447c4a981, 0x000000130ceea52c],
    [0xcc4873f9e65afe69, 0xd243aba0e75fe645, 0x0000000012725dd1],
    [0x3baf513267aa9a3f, 0x4f3a68dbc8f03f24, 0x0000000000000000],
    [0xd2e725a5bbca17a4, 0x0000000154484932, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000029ea10000],
    [0xbb22f008d5d64f9d, 0x405447c4a98187ee, 0x0000000fc178b98b],
    [0x73f9e65afe688c93, 0xaba0e75fe645cc48, 0x0000000d997bd243],
    [0x513267aa9a3ee525, 0x68dbc8f03f243baf, 0x0000000000004f3a],
    [0x25a5bbca17a3aba2, 0x000154484932d2e7, 0x0000000000000000],
    [0x6b4ddaae4689eb04, 0x000000000005b580, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000139f800000],
    [0xf008d5d64f9c394b, 0x47c4a98187eebb22, 0x00000007a9384054],
    [0xe65afe688c928e20, 0xe75fe645cc4873f9, 0x000000155eceaba0],
    [0x67aa9a3ee524f8e1, 0xc8f03f243baf5132, 0x000000004f3a68db],
    [0xbbca17a3aba173d4, 0x54484932d2e725a5, 0x0000000000000001],
    [0xdaae4689eb03dcbf, 0x00000005b5806b4d, 0x0000000000000000],
    [0x851a0b548ea3c996, 0x0000000000000018, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ffc950000],
    [0xd5d64f9c394ae922, 0xa98187eebb22f008, 0x00000016540e47c4],
    [0xfe688c928e1f2196, 0xe645cc4873f9e65a, 0x0000001a226be75f],
    [0x9a3ee524f8e02891, 0x3f243baf513267aa, 0x00000010d493c8f0],
    [0x17a3aba173d3d5fd, 0x4932d2e725a5bbca, 0x0000000000015448],
    [0x4689eb03dcbe2fe9, 0x0005b5806b4ddaae, 0x0000000000000000],
    [0x0b548ea3c99552fd, 0x000000000018851a, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000005b410000],
    [0x4f9c394ae9213016, 0x87eebb22f008d5d6, 0x000000104048a981],
    [0x8c928e1f2195818b, 0xcc4873f9e65afe68, 0x000000086fa9e645],
    [0xe524f8e0289064e4, 0x3baf513267aa9a3e, 0x0000000bd5563f24],
    [0xaba173d3d5fc130d, 0xd2e725a5bbca17a3, 0x0000000154484932],
    [0xeb03dcbe2fe86913, 0xb5806b4ddaae4689, 0x0000000000000005],
    [0x8ea3c99552fc2988, 0x00000018851a0b54, 0x0000000000000000],
    [0x4ff258c744320748, 0x0000000000000069, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000019c8150000],
    [0x394ae92130153561, 0xbb22f008d5d64f9c, 0x00000010de8987ee],
    [0x8e1f2195818ae780, 0x73f9e65afe688c92, 0x0000000b0452cc48],
    [0xf8e0289064e3cffb, 0x513267aa9a3ee524, 0x00000018040b3baf],
    [0x73d3d5fc130c23b8, 0x25a5bbca17a3aba1, 0x0000000018fbd2e7],
    [0xdcbe2fe869126827, 0x6b4ddaae4689eb03, 0x000000000005b580],
    [0xc99552fc298784d8, 0x0018851a0b548ea3, 0x0000000000000000],
    [0x58c7443207477640, 0x0000000000694ff2, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000822720000],
    [0xe9213015356022f0, 0xf008d5d64f9c394a, 0x0000001c61cbbb22],
    [0x2195818ae77f3c37, 0xe65afe688c928e1f, 0x0000000bbc5e73f9],
    [0x289064e3cffa15ac, 0x67aa9a3ee524f8e0, 0x00000008c9185132],
    [0xd5fc130c23b7aa2e, 0xbbca17a3aba173d3, 0x00000012207925a5],
    [0x2fe8691268269aa8, 0xdaae4689eb03dcbe, 0x00000005b5806b4d],
    [0x52fc298784d710d3, 0x851a0b548ea3c995, 0x0000000000000018],
    [0x44320747763f868d, 0x000000694ff258c7, 0x0000000000000000],
    [0x5016d841baa4644c, 0x00000000000001c4, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000020ea00000],
    [0x3015356022ef3217, 0xd5d64f9c394ae921, 0x000000152fa6f008],
    [0x818ae77f3c36a08d, 0xfe688c928e1f2195, 0x00000009eb4ee65a],
    [0x64e3cffa15ab8bba, 0x9a3ee524f8e02890, 0x00000011403f67aa],
    [0x130c23b7aa2da19c, 0x17a3aba173d3d5fc, 0x0000000ac63cbbca],
    [0x691268269aa7acc6, 0x4689eb03dcbe2fe8, 0x00000006105bdaae],
    [0x298784d710d2d086, 0x0b548ea3c99552fc, 0x000000000018851a],
    [0x0747763f868cd01e, 0x00694ff258c74432, 0x0000000000000000],
    [0xd841baa4644b8db5, 0x0000000001c45016, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001418890000],
    [0x356022ef3216417a, 0x4f9c394ae9213015, 0x00000018579cd5d6],
    [0xe77f3c36a08cce4f, 0x8c928e1f2195818a, 0x0000000ea4d6fe68],
    [0xcffa15ab8bb9ccc3, 0xe524f8e0289064e3, 0x000000084e1f9a3e],
    [0x23b7aa2da19b9a3d, 0xaba173d3d5fc130c, 0x000000024f2917a3],
    [0x68269aa7acc51b40, 0xeb03dcbe2fe86912, 0x00000013b0004689],
    [0x84d710d2d085b92b, 0x8ea3c99552fc2987, 0x00000018851a0b54],
    [0x763f868cd01d569b, 0x4ff258c744320747, 0x0000000000000069],
    [0xbaa4644b8db4c788, 0x000001c45016d841, 0x0000000000000000],
    [0xab3c855a0e1517d8, 0x0000000000000796, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000692450000],
    [0x22ef32164179b6c0, 0x394ae92130153560, 0x0000000451f94f9c],
    [0x3c36a08cce4e0a37, 0x8e1f2195818ae77f, 0x000000089bb68c92],
    [0x15ab8bb9ccc2933c, 0xf8e0289064e3cffa, 0x00000007c9ebe524],
    [0xaa2da19b9a3cab82, 0x73d3d5fc130c23b7, 0x00000000e635aba1],
    [0x9aa7acc51b3fd35c, 0xdcbe2fe869126826, 0x000000085518eb03],
    [0x10d2d085b92a647f, 0xc99552fc298784d7, 0x0000001a9f998ea3],
    [0x868cd01d569a53f5, 0x58c744320747763f, 0x0000000000694ff2],
    [0x644b8db4c7871bc4, 0x01c45016d841baa4, 0x0000000000000000],
    [0x855a0e1517d71395, 0x000000000796ab3c, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001171060000],
    [0x32164179b6bf082d, 0xe9213015356022ef, 0x000000073f90394a],
    [0xa08cce4e0a366281, 0x2195818ae77f3c36, 0x00000016637d8e1f],
    [0x8bb9ccc2933b76b5, 0x289064e3cffa15ab, 0x000000138501f8e0],
    [0xa19b9a3cab811d57, 0xd5fc130c23b7aa2d, 0x0000000e7aa473d3],
    [0xacc51b3fd35b883f, 0x2fe8691268269aa7, 0x00000004f704dcbe],
    [0xd085b92a647eb512, 0x52fc298784d710d2, 0x0000001097cec995],
    [0xd01d569a53f4e888, 0x44320747763f868c, 0x0000000fe7c358c7],
    [0x8db4c7871bc3602d, 0x5016d841baa4644b, 0x00000000000001c4],
    [0x0e1517d71394ca12, 0x00000796ab3c855a, 0x0000000000000000],
    [0xb309321cde0be3b6, 0x0000000000002097, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000007ba260000],
    [0x4179b6bf082ce3fe, 0x3015356022ef3216, 0x0000000501dbe921],
    [0xce4e0a36628033a5, 0x818ae77f3c36a08c, 0x00000003d12a2195],
    [0xccc2933b76b4fa42, 0x64e3cffa15ab8bb9, 0x0000001ce3692890],
    [0x9a3cab811d56fa9d, 0x130c23b7aa2da19b, 0x000000184f58d5fc],
    [0x1b3fd35b883ed9c6, 0x691268269aa7acc5, 0x0000001ce8a52fe8],
    [0xb92a647eb5110568, 0x298784d710d2d085, 0x0000000ba5ed52fc],
    [0x569a53f4e887a6ab, 0x0747763f868cd01d, 0x0000000551a74432],
    [0xc7871bc3602cbb46, 0xd841baa4644b8db4, 0x0000000001c45016],
    [0x17d71394ca11fdcf, 0x0796ab3c855a0e15, 0x0000000000000000],
    [0x321cde0be3b5001a, 0x000000002097b309, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000004f0200000],
    [0xb6bf082ce3fd84c0, 0x356022ef32164179, 0x0000000289f23015],
    [0x0a36628033a40be8, 0xe77f3c36a08cce4e, 0x000000173d48818a],
    [0x933b76b4fa414024, 0xcffa15ab8bb9ccc2, 0x00000002d39264e3],
    [0xab811d56fa9c85a6, 0x23b7aa2da19b9a3c, 0x000000044922130c],
    [0xd35b883ed9c580d8, 0x68269aa7acc51b3f, 0x00000001c0296912],
    [0x647eb51105677ca6, 0x84d710d2d085b92a, 0x00000010a3762987],
    [0x53f4e887a6aafea9, 0x763f868cd01d569a, 0x0000000f4dc20747],
    [0x1bc3602cbb453d3a, 0xbaa4644b8db4c787, 0x00000005472bd841],
    [0x1394ca11fdce19b5, 0xab3c855a0e1517d7, 0x0000000000000796],
    [0xde0be3b50019a304, 0x00002097b309321c, 0x0000000000000000],
    [0xea76c619ef3657ec, 0x0000000000008bfb, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000016622e0000],
    [0x082ce3fd84bf5bba, 0x22ef32164179b6bf, 0x0000001d9fcf3560],
    [0x628033a40be73648, 0x3c36a08cce4e0a36, 0x0000001c6ccfe77f],
    [0x76b4fa41402348ec, 0x15ab8bb9ccc2933b, 0x0000000cf5e0cffa],
    [0x1d56fa9c85a535e0, 0xaa2da19b9a3cab81, 0x00000008fcfc23b7],
    [0x883ed9c580d75888, 0x9aa7acc51b3fd35b, 0x0000001445856826],
    [0xb51105677ca5ca8f, 0x10d2d085b92a647e, 0x0000000eca6b84d7],
    [0xe887a6aafea8cb98, 0x868cd01d569a53f4, 0x00000008791e763f],
    [0x602cbb453d393824, 0x644b8db4c7871bc3, 0x0000000e1753baa4],
    [0xca11fdce19b4aed7, 0x855a0e1517d71394, 0x000000000796ab3c],
    [0xe3b50019a3030a33, 0x2097b309321cde0b, 0x0000000000000000],
    [0xc619ef3657eb4edc, 0x000000008bfbea76, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000019e3c70000],
    [0xe3fd84bf5bb9d3e6, 0x32164179b6bf082c, 0x0000000cb80822ef],
    [0x33a40be73647459e, 0xa08cce4e0a366280, 0x0000000a23883c36],
    [0xfa41402348ebc591, 0x8bb9ccc2933b76b4, 0x0000000a9fd615ab],
    [0xfa9c85a535df608f, 0xa19b9a3cab811d56, 0x000000093cceaa2d],
    [0xd9c580d75887ffe6, 0xacc51b3fd35b883e, 0x0000001348219aa7],
    [0x05677ca5ca8e7681, 0xd085b92a647eb511, 0x00000002fbb610d2],
    [0xa6aafea8cb971a7d, 0xd01d569a53f4e887, 0x000000119757868c],
    [0xbb453d39382309ec, 0x8db4c7871bc3602c, 0x00000014f7b2644b],
    [0xfdce19b4aed6bf45, 0x0e1517d71394ca11, 0x000000058497855a],
    [0x0019a3030a3231c0, 0xb309321cde0be3b5, 0x0000000000002097],
    [0xef3657eb4edb3c56, 0x00008bfbea76c619, 0x0000000000000000],
    [0x163246e89954e9a9, 0x000000000002593a, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000052e8c0000],
    [0x84bf5bb9d3e589a1, 0x4179b6bf082ce3fd, 0x00000002fb4a3216],
    [0x0be73647459d41ef, 0xce4e0a36628033a4, 0x0000000d7523a08c],
    [0x402348ebc590999c, 0xccc2933b76b4fa41, 0x000000066d3c8bb9],
    [0x85a535df608eed90, 0x9a3cab811d56fa9c, 0x000000101710a19b],
    [0x80d75887ffe5cab7, 0x1b3fd35b883ed9c5, 0x000000015522acc5],
    [0x7ca5ca8e7680a354, 0xb92a647eb5110567, 0x00000006d4b2d085],
    [0xfea8cb971a7c381e, 0x569a53f4e887a6aa, 0x0000000c49e5d01d],
    [0x3d39382309eb172f, 0xc7871bc3602cbb45, 0x00000004e93f8db4],
    [0x19b4aed6bf442c49, 0x17d71394ca11fdce, 0x00000002241c0e15],
    [0xa3030a3231bf90b0, 0x321cde0be3b50019, 0x000000002097b309],
    [0x57eb4edb3c55b65b, 0x8bfbea76c619ef36, 0x0000000000000000],
    [0x46e89954e9a81fe4, 0x00000002593a1632, 0x0000000000000000],
    [0x163ff802a3426a8d, 0x000000000000000a, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001c56b60000],
    [0x5bb9d3e589a0ece4, 0xb6bf082ce3fd84bf, 0x000000122b8a4179],
    [0x3647459d41eefc20, 0x0a36628033a40be7, 0x0000000f802fce4e],
    [0x48ebc590999b3443, 0x933b76b4fa414023, 0x0000000e2035ccc2],
    [0x35df608eed8f8e22, 0xab811d56fa9c85a5, 0x0000000edc4d9a3c],
    [0x5887ffe5cab6b936, 0xd35b883ed9c580d7, 0x00000009decb1b3f],
    [0xca8e7680a3538142, 0x647eb51105677ca5, 0x000000062144b92a],
    [0xcb971a7c381d07a6, 0x53f4e887a6aafea8, 0x00000001a7b2569a],
    [0x382309eb172e3e61, 0x1bc3602cbb453d39, 0x000000144629c787],
    [0xaed6bf442c480fbe, 0x1394ca11fdce19b4, 0x00000006b8a117d7],
    [0x0a3231bf90aff414, 0xde0be3b50019a303, 0x0000001cd9f6321c],
    [0x4edb3c55b65a883e, 0xea76c619ef3657eb, 0x0000000000008bfb],
    [0x9954e9a81fe35444, 0x0002593a163246e8, 0x0000000000000000],
    [0xf802a3426a8ca07d, 0x00000000000a163f, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000eacff0000],
    [0xd3e589a0ece3dd4f, 0x082ce3fd84bf5bb9, 0x0000000ca995b6bf],
    [0x459d41eefc1fa7ae, 0x628033a40be73647, 0x0000000dd8500a36],
    [0xc590999b34429ee6, 0x76b4fa41402348eb, 0x00000000426f933b],
    [0x608eed8f8e21f320, 0x1d56fa9c85a535df, 0x000000154fbeab81],
    [0xffe5cab6b9358329, 0x883ed9c580d75887, 0x0000001d8057d35b],
    [0x7680a3538141b711, 0xb51105677ca5ca8e, 0x0000001b3847647e],
    [0x1a7c381d07a5741f, 0xe887a6aafea8cb97, 0x0000000fafe753f4],
    [0x09eb172e3e605ad2, 0x602cbb453d393823, 0x00000004d7241bc3],
    [0xbf442c480fbddfa1, 0xca11fdce19b4aed6, 0x00000002c4ab1394],
    [0x31bf90aff4138edc, 0xe3b50019a3030a32, 0x0000001ba778de0b],
    [0x3c55b65a883d7eab, 0xc619ef3657eb4edb, 0x000000008bfbea76],
    [0xe9a81fe35443e1c0, 0x593a163246e89954, 0x0000000000000002],
    [0xa3426a8ca07c2dcc, 0x0000000a163ff802, 0x0000000000000000],
    [0x52adc44bace4a762, 0x000000000000002b, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000a73b00000],
    [0x89a0ece3dd4e6909, 0xe3fd84bf5bb9d3e5, 0x000000000c06082c],
    [0x41eefc1fa7ade5d7, 0x33a40be73647459d, 0x0000000c55b56280],
    [0x999b34429ee53c15, 0xfa41402348ebc590, 0x00000014405976b4],
    [0xed8f8e21f31f1482, 0xfa9c85a535df608e, 0x0000000ea2311d56],
    [0xcab6b9358328ea6b, 0xd9c580d75887ffe5, 0x00000003f689883e],
    [0xa3538141b7104103, 0x05677ca5ca8e7680, 0x00000001c809b511],
    [0x381d07a5741ecc62, 0xa6aafea8cb971a7c, 0x0000000a6a34e887],
    [0x172e3e605ad1dc29, 0xbb453d39382309eb, 0x00000004305f602c],
    [0x2c480fbddfa0185d, 0xfdce19b4aed6bf44, 0x0000000c5711ca11],
    [0x90aff4138edbf1b6, 0x0019a3030a3231bf, 0x0000000609cfe3b5],
    [0xb65a883d7eaa3b8d, 0xef3657eb4edb3c55, 0x0000000d863cc619],
    [0x1fe35443e1bfa421, 0x163246e89954e9a8, 0x000000000002593a],
    [0x6a8ca07c2dcb0cf3, 0x000a163ff802a342, 0x0000000000000000],
    [0xc44bace4a761b05c, 0x00000000002b52ad, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001d397d0000],
    [0xece3dd4e69087102, 0x84bf5bb9d3e589a0, 0x000000086489e3fd],
    [0xfc1fa7ade5d649f3, 0x0be73647459d41ee, 0x0000000f313c33a4],
    [0x34429ee53c141ad0, 0x402348ebc590999b, 0x00000006a40bfa41],
    [0x8e21f31f148122db, 0x85a535df608eed8f, 0x000000102eb7fa9c],
    [0xb9358328ea6af230, 0x80d75887ffe5cab6, 0x00000018184cd9c5],
    [0x8141b710410283b1, 0x7ca5ca8e7680a353, 0x0000000a02b00567],
    [0x07a5741ecc617a2b, 0xfea8cb971a7c381d, 0x000000101ef9a6aa],
    [0x3e605ad1dc28e0ce, 0x3d39382309eb172e, 0x000000122f25bb45],
    [0x0fbddfa0185cbe13, 0x19b4aed6bf442c48, 0x00000005f811fdce],
    [0xf4138edbf1b5e3b9, 0xa3030a3231bf90af, 0x0000000ca71f0019],
    [0x883d7eaa3b8ca1ba, 0x57eb4edb3c55b65a, 0x0000000bb4bdef36],
    [0x5443e1bfa420bc98, 0x46e89954e9a81fe3, 0x00000002593a1632],
    [0xa07c2dcb0cf26f7b, 0x163ff802a3426a8c, 0x000000000000000a],
    [0xace4a761b05b2635, 0x0000002b52adc44b, 0x0000000000000000],
    [0x121a4650e4ddeb93, 0x00000000000000ba, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ec0730000],
    [0xdd4e690871018ebb, 0x5bb9d3e589a0ece3, 0x0000001807ea84bf],
    [0xa7ade5d649f2497a, 0x3647459d41eefc1f, 0x0000000837240be7],
    [0x9ee53c141acfdbbb, 0x48ebc590999b3442, 0x00000008a9ea4023],
    [0xf31f148122da8f9e, 0x35df608eed8f8e21, 0x00000014563785a5],
    [0x8328ea6af22fbd8d, 0x5887ffe5cab6b935, 0x00000008cc8880d7],
    [0xb710410283b0a5ee, 0xca8e7680a3538141, 0x000000097f967ca5],
    [0x741ecc617a2aba2f, 0xcb971a7c381d07a5, 0x0000000d5288fea8],
    [0x5ad1dc28e0cd47a3, 0x382309eb172e3e60, 0x0000000c44263d39],
    [0xdfa0185cbe12d3fa, 0xaed6bf442c480fbd, 0x00000000b53019b4],
    [0x8edbf1b5e3b8c588, 0x0a3231bf90aff413, 0x00000018fc0ea303],
    [0x7eaa3b8ca1b93b53, 0x4edb3c55b65a883d, 0x000000185a9557eb],
    [0xe1bfa420bc97a718, 0x9954e9a81fe35443, 0x0000000ee4d646e8],
    [0x2dcb0cf26f7ab7b8, 0xf802a3426a8ca07c, 0x00000000000a163f],
    [0xa761b05b2634b255, 0x002b52adc44bace4, 0x0000000000000000],
    [0x4650e4ddeb92f34e, 0x0000000000ba121a, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000d76cd0000],
    [0x690871018eba3159, 0xd3e589a0ece3dd4e, 0x0000001098235bb9],
    [0xe5d649f24979c251, 0x459d41eefc1fa7ad, 0x0000001917b23647],
    [0x3c141acfdbbafc05, 0xc590999b34429ee5, 0x0000001634ec48eb],
    [0x148122da8f9d4d83, 0x608eed8f8e21f31f, 0x00000001dcd035df],
    [0xea6af22fbd8cc194, 0xffe5cab6b9358328, 0x000000035e0e5887],
    [0x410283b0a5ed881c, 0x7680a3538141b710, 0x000000056112ca8e],
    [0xcc617a2aba2edb85, 0x1a7c381d07a5741e, 0x000000082878cb97],
    [0xdc28e0cd47a24e22, 0x09eb172e3e605ad1, 0x0000001432883823],
    [0x185cbe12d3f98416, 0xbf442c480fbddfa0, 0x0000000bafd0aed6],
    [0xf1b5e3b8c5870899, 0x31bf90aff4138edb, 0x000000153e120a32],
    [0x3b8ca1b93b52a16f, 0x3c55b65a883d7eaa, 0x00000013c5314edb],
    [0xa420bc97a717a7b1, 0xe9a81fe35443e1bf, 0x000000009d389954],
    [0x0cf26f7ab7b7ea44, 0xa3426a8ca07c2dcb, 0x0000000a163ff802],
    [0xb05b2634b254f189, 0x52adc44bace4a761, 0x000000000000002b],
    [0xe4ddeb92f34d6262, 0x000000ba121a4650, 0x0000000000000000],
    [0x2ae9b9f14e0b23fa, 0x000000000000031f, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000017a41d0000],
    [0x71018eba31588166, 0x89a0ece3dd4e6908, 0x00000006cfe2d3e5],
    [0x49f24979c250a8b3, 0x41eefc1fa7ade5d6, 0x00000003dd70459d],
    [0x1acfdbbafc04f170, 0x999b34429ee53c14, 0x0000000379c6c590],
    [0x22da8f9d4d82a4cb, 0xed8f8e21f31f1481, 0x00000017b344608e],
    [0xf22fbd8cc193ba96, 0xcab6b9358328ea6a, 0x000000002606ffe5],
    [0x83b0a5ed881bebd9, 0xa3538141b7104102, 0x0000001cec0a7680],
    [0x7a2aba2edb84dc61, 0x381d07a5741ecc61, 0x00000018ef181a7c],
    [0xe0cd47a24e213ac5, 0x172e3e605ad1dc28, 0x0000000fdf6d09eb],
    [0xbe12d3f984156eba, 0x2c480fbddfa0185c, 0x0000000eccc7bf44],
    [0xe3b8c587089854db, 0x90aff4138edbf1b5, 0x00000013f4da31bf],
    [0xa1b93b52a16e782a, 0xb65a883d7eaa3b8c, 0x00000009579c3c55],
    [0xbc97a717a7b08e4d, 0x1fe35443e1bfa420, 0x0000000f76b6e9a8],
    [0x6f7ab7b7ea43b86e, 0x6a8ca07c2dcb0cf2, 0x0000000aa7e9a342],
    [0x2634b254f1883939, 0xc44bace4a761b05b, 0x00000000002b52ad],
    [0xeb92f34d62616ce5, 0x00ba121a4650e4dd, 0x0000000000000000],
    [0xb9f14e0b23f99295, 0x00000000031f2ae9, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000007aa810000],
    [0x8eba315881653427, 0xece3dd4e69087101, 0x00000019d73689a0],
    [0x4979c250a8b22feb, 0xfc1fa7ade5d649f2, 0x00000006557e41ee],
    [0xdbbafc04f16f2b1b, 0x34429ee53c141acf, 0x000000039f29999b],
    [0x8f9d4d82a4cae9f8, 0x8e21f31f148122da, 0x0000000cbdc5ed8f],
    [0xbd8cc193ba95aa4f, 0xb9358328ea6af22f, 0x000000137147cab6],
    [0xa5ed881bebd84b5a, 0x8141b710410283b0, 0x00000006c250a353],
    [0xba2edb84dc600205, 0x07a5741ecc617a2a, 0x0000000ac456381d],
    [0x47a24e213ac47d9a, 0x3e605ad1dc28e0cd, 0x00000010c733172e],
    [0xd3f984156eb9a53f, 0x0fbddfa0185cbe12, 0x0000000b2a3f2c48],
    [0xc587089854da2251, 0xf4138edbf1b5e3b8, 0x00000015142390af],
    [0x3b52a16e78299289, 0x883d7eaa3b8ca1b9, 0x00000017207ab65a],
    [0xa717a7b08e4cdce6, 0x5443e1bfa420bc97, 0x00000002f09f1fe3],
    [0xb7b7ea43b86daa11, 0xa07c2dcb0cf26f7a, 0x000000119e9a6a8c],
    [0xb254f18839386d37, 0xace4a761b05b2634, 0x0000000d8548c44b],
    [0xf34d62616ce41322, 0x121a4650e4ddeb92, 0x00000000000000ba],
    [0x4e0b23f99294bba6, 0x0000031f2ae9b9f1, 0x0000000000000000],
    [0x6619ba27255a2c81, 0x0000000000000d68, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001740630000],
    [0x3158816534261126, 0xdd4e690871018eba, 0x000000075ec8ece3],
    [0xc250a8b22feaa6be, 0xa7ade5d649f24979, 0x0000000f82e6fc1f],
    [0xfc04f16f2b1a15ac, 0x9ee53c141acfdbba, 0x00000007e78f3442],
    [0x4d82a4cae9f7b11b, 0xf31f148122da8f9d, 0x0000000c75958e21],
    [0xc193ba95aa4e8740, 0x8328ea6af22fbd8c, 0x0000000f4cecb935],
    [0x881bebd84b59f310, 0xb710410283b0a5ed, 0x00000008b8688141],
    [0xdb84dc60020421b6, 0x741ecc617a2aba2e, 0x000000166f3107a5],
    [0x4e213ac47d9900ff, 0x5ad1dc28e0cd47a2, 0x0000000e67f33e60],
    [0x84156eb9a53e3833, 0xdfa0185cbe12d3f9, 0x000000048dc00fbd],
    [0x089854da2250ffa9, 0x8edbf1b5e3b8c587, 0x0000000e515ff413],
    [0xa16e782992882873, 0x7eaa3b8ca1b93b52, 0x0000000fce12883d],
    [0xa7b08e4cdce5b08c, 0xe1bfa420bc97a717, 0x0000001ce9a35443],
    [0xea43b86daa102472, 0x2dcb0cf26f7ab7b7, 0x000000176f6fa07c],
    [0xf18839386d363b24, 0xa761b05b2634b254, 0x000000061e17ace4],
    [0x62616ce41321a019, 0x4650e4ddeb92f34d, 0x0000000000ba121a],
    [0x23f99294bba5ae40, 0x031f2ae9b9f14e0b, 0x0000000000000000],
    [0xba27255a2c80a538, 0x000000000d686619, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000012419e0000],
    [0x8165342611258611, 0x690871018eba3158, 0x0000000aafb8dd4e],
    [0xa8b22feaa6bdcdac, 0xe5d649f24979c250, 0x00000017920ea7ad],
    [0xf16f2b1a15abafe4, 0x3c141acfdbbafc04, 0x000000073c849ee5],
    [0xa4cae9f7b11ad589, 0x148122da8f9d4d82, 0x0000000986c3f31f],
    [0xba95aa4e873f4ed2, 0xea6af22fbd8cc193, 0x00000003c8cf8328],
    [0xebd84b59f30f134f, 0x410283b0a5ed881b, 0x000000072bb9b710],
    [0xdc60020421b52eb2, 0xcc617a2aba2edb84, 0x000000130f3c741e],
    [0x3ac47d9900fe9c7f, 0xdc28e0cd47a24e21, 0x0000000779055ad1],
    [0x6eb9a53e383249c8, 0x185cbe12d3f98415, 0x00000015684cdfa0],
    [0x54da2250ffa8f276, 0xf1b5e3b8c5870898, 0x00000009d5428edb],
    [0x7829928828726654, 0x3b8ca1b93b52a16e, 0x0000000ed14e7eaa],
    [0x8e4cdce5b08b69b5, 0xa420bc97a717a7b0, 0x00000011795ce1bf],
    [0xb86daa102471b0cf, 0x0cf26f7ab7b7ea43, 0x00000016beb62dcb],
    [0x39386d363b23fee4, 0xb05b2634b254f188, 0x00000012d5a8a761],
    [0x6ce41321a0183e11, 0xe4ddeb92f34d6261, 0x0000000741bc4650],
    [0x9294bba5ae3f0330, 0x2ae9b9f14e0b23f9, 0x000000000000031f],
    [0x255a2c80a537b0f0, 0x00000d686619ba27, 0x0000000000000000],
    [0x0a6cc11ac2be832e, 0x0000000000003996, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000001f7260000],
    [0x3426112586103eac, 0x71018eba31588165, 0x0000001417376908],
    [0x2feaa6bdcdabb8a9, 0x49f24979c250a8b2, 0x00000004ae55e5d6],
    [0x2b1a15abafe33ddb, 0x1acfdbbafc04f16f, 0x0000000043b83c14],
    [0xe9f7b11ad5887e24, 0x22da8f9d4d82a4ca, 0x00000018e67b1481],
    [0xaa4e873f4ed1ac9b, 0xf22fbd8cc193ba95, 0x0000000095deea6a],
    [0x4b59f30f134e2fa5, 0x83b0a5ed881bebd8, 0x00000016b2184102],
    [0x020421b52eb172d9, 0x7a2aba2edb84dc60, 0x000000098486cc61],
    [0x7d9900fe9c7e3562, 0xe0cd47a24e213ac4, 0x0000001597e1dc28],
    [0xa53e383249c75632, 0xbe12d3f984156eb9, 0x0000000c8c11185c],
    [0x2250ffa8f27564ef, 0xe3b8c587089854da, 0x00000002f0e8f1b5],
    [0x9288287266533380, 0xa1b93b52a16e7829, 0x000000079f423b8c],
    [0xdce5b08b69b4592a, 0xbc97a717a7b08e4c, 0x0000001aa4e2a420],
    [0xaa102471b0ce9f66, 0x6f7ab7b7ea43b86d, 0x0000001538eb0cf2],
    [0x6d363b23fee36616, 0x2634b254f1883938, 0x00000015de14b05b],
    [0x1321a0183e10583d, 0xeb92f34d62616ce4, 0x000000189dc7e4dd],
    [0xbba5ae3f032fad21, 0xb9f14e0b23f99294, 0x00000000031f2ae9],
    [0x2c80a537b0efefec, 0x0d686619ba27255a, 0x0000000000000000],
    [0xc11ac2be832d2969, 0x0000000039960a6c, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000005cd60000],
    [0x112586103eab5040, 0x8eba315881653426, 0x0000001a9c097101],
    [0xa6bdcdabb8a8f616, 0x4979c250a8b22fea, 0x0000001297ed49f2],
    [0x15abafe33dda325d, 0xdbbafc04f16f2b1a, 0x0000001515db1acf],
    [0xb11ad5887e232c41, 0x8f9d4d82a4cae9f7, 0x0000000b1d8d22da],
    [0x873f4ed1ac9a47b9, 0xbd8cc193ba95aa4e, 0x0000000b53a7f22f],
    [0xf30f134e2fa4ae41, 0xa5ed881bebd84b59, 0x00000009f2be83b0],
    [0x21b52eb172d8d161, 0xba2edb84dc600204, 0x00000011fe3c7a2a],
    [0x00fe9c7e35618eb1, 0x47a24e213ac47d99, 0x00000004623ce0cd],
    [0x383249c75631c599, 0xd3f984156eb9a53e, 0x0000000d37d9be12],
    [0xffa8f27564ee62a5, 0xc587089854da2250, 0x0000000d5346e3b8],
    [0x28726653337f3560, 0x3b52a16e78299288, 0x0000000581cfa1b9],
    [0xb08b69b4592909ea, 0xa717a7b08e4cdce5, 0x0000001c928abc97],
    [0x2471b0ce9f65e8ae, 0xb7b7ea43b86daa10, 0x0000000c44f66f7a],
    [0x3b23fee366150b47, 0xb254f18839386d36, 0x0000000469882634],
    [0xa0183e10583cd332, 0xf34d62616ce41321, 0x0000001a617eeb92],
    [0xae3f032fad207090, 0x4e0b23f99294bba5, 0x000000184ea7b9f1],
    [0xa537b0efefebdd3b, 0x6619ba27255a2c80, 0x0000000000000d68],
    [0xc2be832d2968c44b, 0x000039960a6cc11a, 0x0000000000000000],
    [0x9530e188c128d12c, 0x000000000000f754, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000d8c8f0000],
    [0x86103eab503f216d, 0x3158816534261125, 0x0000001c59678eba],
    [0xcdabb8a8f615373f, 0xc250a8b22feaa6bd, 0x0000000dbbbf4979],
    [0xafe33dda325c3a53, 0xfc04f16f2b1a15ab, 0x00000006d294dbba],
    [0xd5887e232c4082ba, 0x4d82a4cae9f7b11a, 0x00000002f8538f9d],
    [0x4ed1ac9a47b8e308, 0xc193ba95aa4e873f, 0x000000198098bd8c],
    [0x134e2fa4ae40ae6a, 0x881bebd84b59f30f, 0x0000000ae8eca5ed],
    [0x2eb172d8d1601cb5, 0xdb84dc60020421b5, 0x00000007fcbfba2e],
    [0x9c7e35618eb04ef4, 0x4e213ac47d9900fe, 0x0000001c4aea47a2],
    [0x49c75631c5982b14, 0x84156eb9a53e3832, 0x00000001a33bd3f9],
    [0xf27564ee62a46e67, 0x089854da2250ffa8, 0x000000133d2ac587],
    [0x6653337f355f140f, 0xa16e782992882872, 0x0000000581f33b52],
    [0x69b4592909e9ae01, 0xa7b08e4cdce5b08b, 0x0000000d04cca717],
    [0xb0ce9f65e8ad6934, 0xea43b86daa102471, 0x00000013c706b7b7],
    [0xfee366150b46715c, 0xf18839386d363b23, 0x000000120476b254],
    [0x3e10583cd33148db, 0x62616ce41321a018, 0x000000029806f34d],
    [0x032fad20708f579d, 0x23f99294bba5ae3f, 0x00000005fd754e0b],
    [0xb0efefebdd3a7f74, 0xba27255a2c80a537, 0x000000000d686619],
    [0x832d2968c44a9445, 0x39960a6cc11ac2be, 0x0000000000000000],
    [0xe188c128d12bee5a, 0x00000000f7549530, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000149b560000],
    [0x3eab503f216cd0fe, 0x8165342611258610, 0x00000012c7a63158],
    [0xb8a8f615373e3962, 0xa8b22feaa6bdcdab, 0x0000000126a1c250],
    [0x3dda325c3a52e281, 0xf16f2b1a15abafe3, 0x000000009d93fc04],
    [0x7e232c4082b91525, 0xa4cae9f7b11ad588, 0x0000000497ee4d82],
    [0xac9a47b8e3076f40, 0xba95aa4e873f4ed1, 0x00000006803cc193],
    [0x2fa4ae40ae69892c, 0xebd84b59f30f134e, 0x0000000121ba881b],
    [0x72d8d1601cb4642c, 0xdc60020421b52eb1, 0x00000007bca2db84],
    [0x35618eb04ef3dee9, 0x3ac47d9900fe9c7e, 0x00000004fd7a4e21],
    [0x5631c5982b13d7ea, 0x6eb9a53e383249c7, 0x00000005aa448415],
    [0x64ee62a46e66747f, 0x54da2250ffa8f275, 0x00000019b87d0898],
    [0x337f355f140e4f03, 0x7829928828726653, 0x0000000b4e27a16e],
    [0x592909e9ae00a388, 0x8e4cdce5b08b69b4, 0x0000000fc473a7b0],
    [0x9f65e8ad6933b9a6, 0xb86daa102471b0ce, 0x00000001ea28ea43],
    [0x66150b46715bb234, 0x39386d363b23fee3, 0x00000016af00f188],
    [0x583cd33148da6149, 0x6ce41321a0183e10, 0x0000001c4e4a6261],
    [0xad20708f579c45aa, 0x9294bba5ae3f032f, 0x000000091d4723f9],
    [0xefebdd3a7f737777, 0x255a2c80a537b0ef, 0x0000000521baba27],
    [0x2968c44a9444a8ee, 0x0a6cc11ac2be832d, 0x0000000000003996],
    [0xc128d12bee59e68f, 0x0000f7549530e188, 0x0000000000000000],
    [0xa6fe9631f9d94f67, 0x0000000000042646, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001790360000],
    [0x503f216cd0fd77d5, 0x3426112586103eab, 0x0000000baf638165],
    [0xf615373e3961af3a, 0x2feaa6bdcdabb8a8, 0x00000019e226a8b2],
    [0x325c3a52e28042a9, 0x2b1a15abafe33dda, 0x000000117137f16f],
    [0x2c4082b91524bcec, 0xe9f7b11ad5887e23, 0x000000050b59a4ca],
    [0x47b8e3076f3fdf88, 0xaa4e873f4ed1ac9a, 0x000000148ec0ba95],
    [0xae40ae69892bcdda, 0x4b59f30f134e2fa4, 0x000000165a83ebd8],
    [0xd1601cb4642bbf28, 0x020421b52eb172d8, 0x0000000ff25bdc60],
    [0x8eb04ef3dee8863e, 0x7d9900fe9c7e3561, 0x0000000d6bf03ac4],
    [0xc5982b13d7e94ad4, 0xa53e383249c75631, 0x00000014fc686eb9],
    [0x62a46e66747ee530, 0x2250ffa8f27564ee, 0x00000009ade854da],
    [0x355f140e4f02a6e2, 0x928828726653337f, 0x00000011e5627829],
    [0x09e9ae00a38761fa, 0xdce5b08b69b45929, 0x0000001988808e4c],
    [0xe8ad6933b9a5b136, 0xaa102471b0ce9f65, 0x0000000d2349b86d],
    [0x0b46715bb2337397, 0x6d363b23fee36615, 0x000000174ceb3938],
    [0xd33148da61480e1c, 0x1321a0183e10583c, 0x00000004d3c86ce4],
    [0x708f579c45a9861a, 0xbba5ae3f032fad20, 0x00000014fec79294],
    [0xdd3a7f737776be8b, 0x2c80a537b0efefeb, 0x000000195243255a],
    [0xc44a9444a8ed586d, 0xc11ac2be832d2968, 0x0000000039960a6c],
    [0xd12bee59e68ef47d, 0xf7549530e188c128, 0x0000000000000000],
    [0x9631f9d94f66cfa1, 0x000000042646a6fe, 0x0000000000000000],
    [0xd270cc51055ea7cb, 0x0000000000000011, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000008dcf80000],
    [0x216cd0fd77d43bc6, 0x112586103eab503f, 0x00000018d4ea3426],
    [0x373e3961af39d458, 0xa6bdcdabb8a8f615, 0x0000000612c42fea],
    [0x3a52e28042a8de27, 0x15abafe33dda325c, 0x0000001bde302b1a],
    [0x82b91524bceb6312, 0xb11ad5887e232c40, 0x0000001248a6e9f7],
    [0xe3076f3fdf87720f, 0x873f4ed1ac9a47b8, 0x00000014f167aa4e],
    [0xae69892bcdd91f49, 0xf30f134e2fa4ae40, 0x00000000f6444b59],
    [0x1cb4642bbf272a6f, 0x21b52eb172d8d160, 0x00000005d2590204],
    [0x4ef3dee8863d720c, 0x00fe9c7e35618eb0, 0x0000000e7c927d99],
    [0x2b13d7e94ad3a2f1, 0x383249c75631c598, 0x00000012dbe5a53e],
    [0x6e66747ee52f1050, 0xffa8f27564ee62a4, 0x00000001e6412250],
    [0x140e4f02a6e182da, 0x28726653337f355f, 0x00000017ad2c9288],
    [0xae00a38761f9afbb, 0xb08b69b4592909e9, 0x00000003c228dce5],
    [0x6933b9a5b135596b, 0x2471b0ce9f65e8ad, 0x0000000ca06baa10],
    [0x715bb23373961aab, 0x3b23fee366150b46, 0x00000007d43a6d36],
    [0x48da61480e1b914c, 0xa0183e10583cd331, 0x00000008c5f11321],
    [0x579c45a98619cbb7, 0xae3f032fad20708f, 0x000000002677bba5],
    [0x7f737776be8aa47f, 0xa537b0efefebdd3a, 0x000000063b102c80],
    [0x9444a8ed586c72c9, 0xc2be832d2968c44a, 0x00000013b186c11a],
    [0xee59e68ef47ce570, 0x9530e188c128d12b, 0x000000000000f754],
    [0xf9d94f66cfa00210, 0x00042646a6fe9631, 0x0000000000000000],
    [0xcc51055ea7ca8fd7, 0x000000000011d270, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000008bc960000],
    [0xd0fd77d43bc5c2b2, 0x86103eab503f216c, 0x0000000e63c51125],
    [0x3961af39d4573798, 0xcdabb8a8f615373e, 0x0000000a2bf3a6bd],
    [0xe28042a8de262f94, 0xafe33dda325c3a52, 0x000000063f7015ab],
    [0x1524bceb63110e05, 0xd5887e232c4082b9, 0x0000000ebd71b11a],
    [0x6f3fdf87720e1bed, 0x4ed1ac9a47b8e307, 0x000000038290873f],
    [0x892bcdd91f48989e, 0x134e2fa4ae40ae69, 0x0000000c61eaf30f],
    [0x642bbf272a6e1a9e, 0x2eb172d8d1601cb4, 0x0000001d7a9f21b5],
    [0xdee8863d720b8781, 0x9c7e35618eb04ef3, 0x0000000bb56900fe],
    [0xd7e94ad3a2f0dc52, 0x49c75631c5982b13, 0x0000000988a33832],
    [0x747ee52f104f9831, 0xf27564ee62a46e66, 0x0000001aa2c0ffa8],
    [0x4f02a6e182d9fad2, 0x6653337f355f140e, 0x00000002a8432872],
    [0xa38761f9afba3d8e, 0x69b4592909e9ae00, 0x0000001a787db08b],
    [0xb9a5b135596a4bd6, 0xb0ce9f65e8ad6933, 0x0000000861822471],
    [0xb23373961aaa21f2, 0xfee366150b46715b, 0x00000005a4f63b23],
    [0x61480e1b914b0c21, 0x3e10583cd33148da, 0x0000000eabd5a018],
    [0x45a98619cbb6e76d, 0x032fad20708f579c, 0x0000000cf773ae3f],
    [0x7776be8aa47e9438, 0xb0efefebdd3a7f73, 0x0000000e8e07a537],
    [0xa8ed586c72c820e6, 0x832d2968c44a9444, 0x0000000b6188c2be],
    [0xe68ef47ce56fd516, 0xe188c128d12bee59, 0x00000000f7549530],
    [0x4f66cfa0020f039c, 0x2646a6fe9631f9d9, 0x0000000000000004],
    [0x055ea7ca8fd68f6f, 0x00000011d270cc51, 0x0000000000000000],
    [0x8b888296c5f9e2bb, 0x000000000000004c, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000003c8440000],
    [0x77d43bc5c2b12ed1, 0x3eab503f216cd0fd, 0x0000000a2dfe8610],
    [0xaf39d4573797bd4b, 0xb8a8f615373e3961, 0x000000171b42cdab],
    [0x42a8de262f93dca5, 0x3dda325c3a52e280, 0x00000001fa34afe3],
    [0xbceb63110e043f11, 0x7e232c4082b91524, 0x000000130429d588],
    [0xdf87720e1bec494d, 0xac9a47b8e3076f3f, 0x0000001234414ed1],
    [0xcdd91f48989dbdca, 0x2fa4ae40ae69892b, 0x0000000b835e134e],
    [0xbf272a6e1a9d3725, 0x72d8d1601cb4642b, 0x0000001d629d2eb1],
    [0x863d720b87803e55, 0x35618eb04ef3dee8, 0x000000109bff9c7e],
    [0x4ad3a2f0dc51d033, 0x5631c5982b13d7e9, 0x0000001b553e49c7],
    [0xe52f104f9830f070, 0x64ee62a46e66747e, 0x000000135f2cf275],
    [0xa6e182d9fad10fc9, 0x337f355f140e4f02, 0x0000000c30336653],
    [0x61f9afba3d8d245a, 0x592909e9ae00a387, 0x000000124e4669b4],
    [0xb135596a4bd572ee, 0x9f65e8ad6933b9a5, 0x0000001724a0b0ce],
    [0x73961aaa21f19d71, 0x66150b46715bb233, 0x00000003ce37fee3],
    [0x0e1b914b0c20efdd, 0x583cd33148da6148, 0x0000000b19ba3e10],
    [0x8619cbb6e76c9969, 0xad20708f579c45a9, 0x0000001a0ffa032f],
    [0xbe8aa47e943758d0, 0xefebdd3a7f737776, 0x0000000a83d9b0ef],
    [0x586c72c820e5b373, 0x2968c44a9444a8ed, 0x0000000209cf832d],
    [0xf47ce56fd515c9ed, 0xc128d12bee59e68e, 0x000000107334e188],
    [0xcfa0020f039bad4d, 0xa6fe9631f9d94f66, 0x0000000000042646],
    [0xa7ca8fd68f6e505e, 0x0011d270cc51055e, 0x0000000000000000],
    [0x8296c5f9e2ba8def, 0x00000000004c8b88, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000a15af0000],
    [0x3bc5c2b12ed066d0, 0x503f216cd0fd77d4, 0x00000009897b3eab],
    [0xd4573797bd4a732d, 0xf615373e3961af39, 0x000000150024b8a8],
    [0xde262f93dca414c7, 0x325c3a52e28042a8, 0x0000000830773dda],
    [0x63110e043f10e8c2, 0x2c4082b91524bceb, 0x000000061e6b7e23],
    [0x720e1bec494c01fc, 0x47b8e3076f3fdf87, 0x000000088a56ac9a],
    [0x1f48989dbdc9a450, 0xae40ae69892bcdd9, 0x00000014adf52fa4],
    [0x2a6e1a9d3724538b, 0xd1601cb4642bbf27, 0x00000016b6df72d8],
    [0x720b87803e544002, 0x8eb04ef3dee8863d, 0x0000000b96a23561],
    [0xa2f0dc51d032e441, 0xc5982b13d7e94ad3, 0x00000019b37a5631],
    [0x104f9830f06f1d55, 0x62a46e66747ee52f, 0x0000001d9e3764ee],
    [0x82d9fad10fc83114, 0x355f140e4f02a6e1, 0x000000098e19337f],
    [0xafba3d8d2459fff8, 0x09e9ae00a38761f9, 0x00000017ba3e5929],
    [0x596a4bd572ed41b4, 0xe8ad6933b9a5b135, 0x00000004e6529f65],
    [0x1aaa21f19d708a6f, 0x0b46715bb2337396, 0x0000000e29736615],
    [0x914b0c20efdca4a7, 0xd33148da61480e1b, 0x000000078d8e583c],
    [0xcbb6e76c996871e6, 0x708f579c45a98619, 0x000000191d34ad20],
    [0xa47e943758cf6eec, 0xdd3a7f737776be8a, 0x000000186495efeb],
    [0x72c820e5b3727874, 0xc44a9444a8ed586c, 0x0000000980e32968],
    [0xe56fd515c9ec542e, 0xd12bee59e68ef47c, 0x0000001d7927c128],
    [0x020f039bad4cfbcb, 0x9631f9d94f66cfa0, 0x000000042646a6fe],
    [0x8fd68f6e505dd389, 0xd270cc51055ea7ca, 0x0000000000000011],
    [0xc5f9e2ba8dee8a97, 0x0000004c8b888296, 0x0000000000000000],
    [0xc22ca71a1bd6f0a6, 0x0000000000000148, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000eb2e00000],
    [0xc2b12ed066cf05d1, 0x216cd0fd77d43bc5, 0x00000004f08f503f],
    [0x3797bd4a732c0ee5, 0x373e3961af39d457, 0x000000157934f615],
    [0x2f93dca414c699b8, 0x3a52e28042a8de26, 0x0000000f0522325c],
    [0x0e043f10e8c11944, 0x82b91524bceb6311, 0x0000000d3eb82c40],
    [0x1bec494c01fbff9a, 0xe3076f3fdf87720e, 0x0000000f0f4e47b8],
    [0x989dbdc9a44f8e44, 0xae69892bcdd91f48, 0x0000001660baae40],
    [0x1a9d3724538a14da, 0x1cb4642bbf272a6e, 0x0000000b3f67d160],
    [0x87803e5440010475, 0x4ef3dee8863d720b, 0x00000005a08a8eb0],
    [0xdc51d032e440212f, 0x2b13d7e94ad3a2f0, 0x000000087b78c598],
    [0x9830f06f1d54944a, 0x6e66747ee52f104f, 0x00000016231c62a4],
    [0xfad10fc8311352d1, 0x140e4f02a6e182d9, 0x000000189b00355f],
    [0x3d8d2459fff79b95, 0xae00a38761f9afba, 0x0000000a92b409e9],
    [0x4bd572ed41b3ab13, 0x6933b9a5b135596a, 0x0000001066b7e8ad],
    [0x21f19d708a6e17bc, 0x715bb23373961aaa, 0x0000000b79970b46],
    [0x0c20efdca4a6e67b, 0x48da61480e1b914b, 0x000000039277d331],
    [0xe76c996871e5fe69, 0x579c45a98619cbb6, 0x0000000d9ebe708f],
    [0x943758cf6eeb28e3, 0x7f737776be8aa47e, 0x000000115d43dd3a],
    [0x20e5b372787342f4, 0x9444a8ed586c72c8, 0x0000000a3a7ec44a],
    [0xd515c9ec542dec0a, 0xee59e68ef47ce56f, 0x0000000ba2ccd12b],
    [0x039bad4cfbca189d, 0xf9d94f66cfa0020f, 0x0000001a434a9631],
    [0x8f6e505dd3883605, 0xcc51055ea7ca8fd6, 0x000000000011d270],
    [0xe2ba8dee8a96a68f, 0x004c8b888296c5f9, 0x0000000000000000],
    [0xa71a1bd6f0a5b37e, 0x000000000148c22c, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001955f60000],
    [0x2ed066cf05d0e92b, 0xd0fd77d43bc5c2b1, 0x0000000e7cd9216c],
    [0xbd4a732c0ee4919d, 0x3961af39d4573797, 0x000000134c51373e],
    [0xdca414c699b76a7f, 0xe28042a8de262f93, 0x0000000d4a633a52],
    [0x3f10e8c1194353eb, 0x1524bceb63110e04, 0x00000001bb2282b9],
    [0x494c01fbff9933af, 0x6f3fdf87720e1bec, 0x00000018926ce307],
    [0xbdc9a44f8e43e9c3, 0x892bcdd91f48989d, 0x0000000c32c3ae69],
    [0x3724538a14d99369, 0x642bbf272a6e1a9d, 0x0000001afa6f1cb4],
    [0x3e5440010474794f, 0xdee8863d720b8780, 0x000000049ec24ef3],
    [0xd032e440212e5f24, 0xd7e94ad3a2f0dc51, 0x00000017dacc2b13],
    [0xf06f1d5494498adc, 0x747ee52f104f9830, 0x0000000354dc6e66],
    [0x0fc8311352d07bf6, 0x4f02a6e182d9fad1, 0x000000002613140e],
    [0x2459fff79b947dc6, 0xa38761f9afba3d8d, 0x0000000c0b0fae00],
    [0x72ed41b3ab12bda4, 0xb9a5b135596a4bd5, 0x0000001559836933],
    [0x9d708a6e17bb0ef8, 0xb23373961aaa21f1, 0x000000150b11715b],
    [0xefdca4a6e67a5af7, 0x61480e1b914b0c20, 0x00000006952648da],
    [0x996871e5fe68a8ff, 0x45a98619cbb6e76c, 0x0000001ae259579c],
    [0x58cf6eeb28e2e695, 0x7776be8aa47e9437, 0x0000000ffc727f73],
    [0xb372787342f3e342, 0xa8ed586c72c820e5, 0x00000014ee7e9444],
    [0xc9ec542dec09bc14, 0xe68ef47ce56fd515, 0x00000014cb4cee59],
    [0xad4cfbca189c739c, 0x4f66cfa0020f039b, 0x00000012dd39f9d9],
    [0x505dd388360461c3, 0x055ea7ca8fd68f6e, 0x00000011d270cc51],
    [0x8dee8a96a68e2551, 0x8b888296c5f9e2ba, 0x000000000000004c],
    [0x1bd6f0a5b37d0be1, 0x00000148c22ca71a, 0x0000000000000000],
    [0x01c96621a4ef65ed, 0x0000000000000584, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001d367b0000],
    [0x66cf05d0e92aeb2a, 0x77d43bc5c2b12ed0, 0x00000016be72d0fd],
    [0x732c0ee4919c857a, 0xaf39d4573797bd4a, 0x000000000f853961],
    [0x14c699b76a7efdb1, 0x42a8de262f93dca4, 0x000000088dc0e280],
    [0xe8c1194353ea47e3, 0xbceb63110e043f10, 0x0000000edf231524],
    [0x01fbff9933ae18f8, 0xdf87720e1bec494c, 0x0000000a32ed6f3f],
    [0xa44f8e43e9c257d1, 0xcdd91f48989dbdc9, 0x0000000a2f81892b],
    [0x538a14d99368ff15, 0xbf272a6e1a9d3724, 0x000000185623642b],
    [0x40010474794efa04, 0x863d720b87803e54, 0x0000001883e8dee8],
    [0xe440212e5f238f29, 0x4ad3a2f0dc51d032, 0x0000001d8b8bd7e9],
    [0x1d5494498adb6ad5, 0xe52f104f9830f06f, 0x000000009e10747e],
    [0x311352d07bf52b5c, 0xa6e182d9fad10fc8, 0x00000001b80b4f02],
    [0xfff79b947dc5675e, 0x61f9afba3d8d2459, 0x00000008c6a1a387],
    [0x41b3ab12bda3c0ce, 0xb135596a4bd572ed, 0x0000000bfabfb9a5],
    [0x8a6e17bb0ef7993e, 0x73961aaa21f19d70, 0x00000010c6d1b233],
    [0xa4a6e67a5af691ea, 0x0e1b914b0c20efdc, 0x00000009ab036148],
    [0x71e5fe68a8fe824b, 0x8619cbb6e76c9968, 0x0000001ba5b645a9],
    [0x6eeb28e2e6949834, 0xbe8aa47e943758cf, 0x00000019757e7776],
    [0x787342f3e3412013, 0x586c72c820e5b372, 0x000000037b63a8ed],
    [0x542dec09bc13453d, 0xf47ce56fd515c9ec, 0x00000017f003e68e],
    [0xfbca189c739be1d0, 0xcfa0020f039bad4c, 0x0000001609e74f66],
    [0xd388360461c2842a, 0xa7ca8fd68f6e505d, 0x00000001fb3e055e],
    [0x8a96a68e2550b653, 0x8296c5f9e2ba8dee, 0x00000000004c8b88],
    [0xf0a5b37d0be0e9cd, 0x0148c22ca71a1bd6, 0x0000000000000000],
    [0x6621a4ef65ec6bcb, 0x00000000058401c9, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000139cb50000],
    [0x05d0e92aeb29f3df, 0x3bc5c2b12ed066cf, 0x0000000d76e777d4],
    [0x0ee4919c8579f95e, 0xd4573797bd4a732c, 0x0000000983e8af39],
    [0x99b76a7efdb0d4de, 0xde262f93dca414c6, 0x0000001900c342a8],
    [0x194353ea47e2f859, 0x63110e043f10e8c1, 0x00000001bbc9bceb],
    [0xff9933ae18f70b4d, 0x720e1bec494c01fb, 0x00000014c018df87],
    [0x8e43e9c257d063ed, 0x1f48989dbdc9a44f, 0x000000091e75cdd9],
    [0x14d99368ff140a8c, 0x2a6e1a9d3724538a, 0x0000000e4e6fbf27],
    [0x0474794efa03ba1b, 0x720b87803e544001, 0x00000013791f863d],
    [0x212e5f238f285722, 0xa2f0dc51d032e440, 0x0000000af5374ad3],
    [0x94498adb6ad47de7, 0x104f9830f06f1d54, 0x00000016b41de52f],
    [0x52d07bf52b5b263f, 0x82d9fad10fc83113, 0x0000001c5513a6e1],
    [0x9b947dc5675d75e9, 0xafba3d8d2459fff7, 0x0000000c6bdd61f9],
    [0xab12bda3c0cd3935, 0x596a4bd572ed41b3, 0x000000052582b135],
    [0x17bb0ef7993d8ddd, 0x1aaa21f19d708a6e, 0x000000066b277396],
    [0xe67a5af691e91ca7, 0x914b0c20efdca4a6, 0x00000006018c0e1b],
    [0xfe68a8fe824a6e21, 0xcbb6e76c996871e5, 0x000000027a588619],
    [0x28e2e69498336c52, 0xa47e943758cf6eeb, 0x000000194006be8a],
    [0x42f3e34120124f3b, 0x72c820e5b3727873, 0x0000001d1465586c],
    [0xec09bc13453ce19e, 0xe56fd515c9ec542d, 0x0000000773d3f47c],
    [0x189c739be1cfcfc5, 0x020f039bad4cfbca, 0x000000115c3bcfa0],
    [0x360461c284290fbb, 0x8fd68f6e505dd388, 0x000000054d65a7ca],
    [0xa68e2550b652834c, 0xc5f9e2ba8dee8a96, 0x00000010f0be8296],
    [0xb37d0be0e9cc11ae, 0xc22ca71a1bd6f0a5, 0x0000000000000148],
    [0xa4ef65ec6bca6cb6, 0x0000058401c96621, 0x0000000000000000],
    [0x8617a104ee462a19, 0x00000000000017b0, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000103e0d0000],
    [0xe92aeb29f3de227a, 0xc2b12ed066cf05d0, 0x000000144e8c3bc5],
    [0x919c8579f95dff5c, 0x3797bd4a732c0ee4, 0x00000008e40dd457],
    [0x6a7efdb0d4dd06bd, 0x2f93dca414c699b7, 0x00000003f88ade26],
    [0x53ea47e2f858f3ef, 0x0e043f10e8c11943, 0x0000000348f76311],
    [0x33ae18f70b4c27bf, 0x1bec494c01fbff99, 0x00000010e711720e],
    [0xe9c257d063ecb50b, 0x989dbdc9a44f8e43, 0x00000019a2b51f48],
    [0x9368ff140a8ba6fb, 0x1a9d3724538a14d9, 0x00000002af332a6e],
    [0x794efa03ba1a7ace, 0x87803e5440010474, 0x0000001a4704720b],
    [0x5f238f2857218b37, 0xdc51d032e440212e, 0x000000128833a2f0],
    [0x8adb6ad47de6a0e0, 0x9830f06f1d549449, 0x00000014f336104f],
    [0x7bf52b5b263edc95, 0xfad10fc8311352d0, 0x0000000d8f6682d9],
    [0x7dc5675d75e81d07, 0x3d8d2459fff79b94, 0x00000018bfbfafba],
    [0xbda3c0cd39345161, 0x4bd572ed41b3ab12, 0x00000009cf4c596a],
    [0x0ef7993d8ddc9cdd, 0x21f19d708a6e17bb, 0x00000011792c1aaa],
    [0x5af691e91ca6b7b9, 0x0c20efdca4a6e67a, 0x0000000cc888914b],
    [0xa8fe824a6e20ef83, 0xe76c996871e5fe68, 0x0000001d78b1cbb6],
    [0xe69498336c517461, 0x943758cf6eeb28e2, 0x00000010cb31a47e],
    [0xe34120124f3a8445, 0x20e5b372787342f3, 0x0000001a09ba72c8],
    [0xbc13453ce19dc829, 0xd515c9ec542dec09, 0x000000037ee8e56f],
    [0x739be1cfcfc49802, 0x039bad4cfbca189c, 0x000000142765020f],
    [0x61c284290fbaa9b4, 0x8f6e505dd3883604, 0x0000001c60f38fd6],
    [0x2550b652834b9c88, 0xe2ba8dee8a96a68e, 0x0000000a6582c5f9],
    [0x0be0e9cc11adcb2d, 0xa71a1bd6f0a5b37d, 0x000000000148c22c],
    [0x65ec6bca6cb5567e, 0x058401c96621a4ef, 0x0000000000000000],
    [0xa104ee462a18dff0, 0x0000000017b08617, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000b73870000],
    [0xeb29f3de22796b6b, 0x2ed066cf05d0e92a, 0x0000000586fac2b1],
    [0x8579f95dff5bd979, 0xbd4a732c0ee4919c, 0x000000049fdc3797],
    [0xfdb0d4dd06bcd248, 0xdca414c699b76a7e, 0x00000000fd1a2f93],
    [0x47e2f858f3ee38c3, 0x3f10e8c1194353ea, 0x00000019365e0e04],
    [0x18f70b4c27bec88a, 0x494c01fbff9933ae, 0x00000006ecb91bec],
    [0x57d063ecb50a3dfb, 0xbdc9a44f8e43e9c2, 0x00000006cd5f989d],
    [0xff140a8ba6fa9115, 0x3724538a14d99368, 0x000000000e831a9d],
    [0xfa03ba1a7acd1f79, 0x3e5440010474794e, 0x000000130c738780],
    [0x8f2857218b364c56, 0xd032e440212e5f23, 0x0000000b6500dc51],
    [0x6ad47de6a0dfd2a6, 0xf06f1d5494498adb, 0x00000012dfa69830],
    [0x2b5b263edc946203, 0x0fc8311352d07bf5, 0x000000030f52fad1],
    [0x675d75e81d06aaa9, 0x2459fff79b947dc5, 0x00000013e5273d8d],
    [0xc0cd393451606f71, 0x72ed41b3ab12bda3, 0x0000001a73fb4bd5],
    [0x993d8ddc9cdc5a94, 0x9d708a6e17bb0ef7, 0x00000007ab3221f1],
    [0x91e91ca6b7b856cc, 0xefdca4a6e67a5af6, 0x0000001949050c20],
    [0x824a6e20ef825c2e, 0x996871e5fe68a8fe, 0x0000000ce2eee76c],
    [0x98336c5174601c24, 0x58cf6eeb28e2e694, 0x00000017add99437],
    [0x20124f3a84440d16, 0xb372787342f3e341, 0x0000000512b620e5],
    [0x453ce19dc828cadb, 0xc9ec542dec09bc13, 0x0000000671acd515],
    [0xe1cfcfc498015ecf, 0xad4cfbca189c739b, 0x00000019af39039b],
    [0x84290fbaa9b3caa9, 0x505dd388360461c2, 0x0000000da21d8f6e],
    [0xb652834b9c87897a, 0x8dee8a96a68e2550, 0x000000061433e2ba],
    [0xe9cc11adcb2c1361, 0x1bd6f0a5b37d0be0, 0x00000000eed5a71a],
    [0x6bca6cb5567d9ff1, 0x01c96621a4ef65ec, 0x0000000000000584],
    [0xee462a18dfef0551, 0x000017b08617a104, 0x0000000000000000],
    [0xee6ed136d13454cb, 0x00000000000065be, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000012b84f0000],
    [0xf3de22796b6aa0f8, 0x66cf05d0e92aeb29, 0x00000011558f2ed0],
    [0xf95dff5bd978c889, 0x732c0ee4919c8579, 0x00000008669abd4a],
    [0xd4dd06bcd247a209, 0x14c699b76a7efdb0, 0x00000003efdddca4],
    [0xf858f3ee38c2dc1d, 0xe8c1194353ea47e2, 0x00000011b26a3f10],
    [0x0b4c27bec889e08d, 0x01fbff9933ae18f7, 0x000000112565494c],
    [0x63ecb50a3dfabeeb, 0xa44f8e43e9c257d0, 0x000000087537bdc9],
    [0x0a8ba6fa91147a8d, 0x538a14d99368ff14, 0x000000139db13724],
    [0xba1a7acd1f78e7c3, 0x40010474794efa03, 0x0000000bd9603e54],
    [0x57218b364c558b52, 0xe440212e5f238f28, 0x00000019def1d032],
    [0x7de6a0dfd2a5d15a, 0x1d5494498adb6ad4, 0x00000010cef5f06f],
    [0x263edc9462028ae3, 0x311352d07bf52b5b, 0x00000014f4690fc8],
    [0x75e81d06aaa8f435, 0xfff79b947dc5675d, 0x0000001970342459],
    [0x393451606f70bbc7, 0x41b3ab12bda3c0cd, 0x0000001a33f372ed],
    [0x8ddc9cdc5a9357f5, 0x8a6e17bb0ef7993d, 0x0000001591f69d70],
    [0x1ca6b7b856cbb135, 0xa4a6e67a5af691e9, 0x000000185166efdc],
    [0x6e20ef825c2d264d, 0x71e5fe68a8fe824a, 0x000000127e979968],
    [0x6c5174601c23750d, 0x6eeb28e2e6949833, 0x0000001aa6f958cf],
    [0x4f3a84440d153559, 0x787342f3e3412012, 0x0000001938e6b372],
    [0xe19dc828cada40b2, 0x542dec09bc13453c, 0x00000011ec93c9ec],
    [0xcfc498015eced44e, 0xfbca189c739be1cf, 0x00000015d87bad4c],
    [0x0fbaa9b3caa86b86, 0xd388360461c28429, 0x00000019bcc7505d],
    [0x834b9c8789798f9f, 0x8a96a68e2550b652, 0x000000143e078dee],
    [0x11adcb2c136039f2, 0xf0a5b37d0be0e9cc, 0x0000001116eb1bd6],
    [0x6cb5567d9ff09d2f, 0x6621a4ef65ec6bca, 0x00000000058401c9],
    [0x2a18dfef0550706b, 0x17b08617a104ee46, 0x0000000000000000],
    [0xd136d13454ca17af, 0x0000000065beee6e, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000012661f0000],
    [0x22796b6aa0f775b2, 0x05d0e92aeb29f3de, 0x0000000a421266cf],
    [0xff5bd978c88897ed, 0x0ee4919c8579f95d, 0x00000010701d732c],
    [0x06bcd247a2080c0e, 0x99b76a7efdb0d4dd, 0x0000000f282f14c6],
    [0xf3ee38c2dc1cde4b, 0x194353ea47e2f858, 0x0000001cdee1e8c1],
    [0x27bec889e08c5bbf, 0xff9933ae18f70b4c, 0x0000001285e401fb],
    [0xb50a3dfabeeaa810, 0x8e43e9c257d063ec, 0x0000000258e6a44f],
    [0xa6fa91147a8c6ba6, 0x14d99368ff140a8b, 0x000000003ca4538a],
    [0x7acd1f78e7c228d4, 0x0474794efa03ba1a, 0x0000000eee6c4001],
    [0x8b364c558b51a26c, 0x212e5f238f285721, 0x00000013b150e440],
    [0xa0dfd2a5d1590b33, 0x94498adb6ad47de6, 0x000000047fc51d54],
    [0xdc9462028ae2ca54, 0x52d07bf52b5b263e, 0x0000001bd92d3113],
    [0x1d06aaa8f434c5bb, 0x9b947dc5675d75e8, 0x0000000c07aafff7],
    [0x51606f70bbc686cd, 0xab12bda3c0cd3934, 0x00000019a20941b3],
    [0x9cdc5a9357f41f2d, 0x17bb0ef7993d8ddc, 0x000000090ea38a6e],
    [0xb7b856cbb1343144, 0xe67a5af691e91ca6, 0x00000017bf4da4a6],
    [0xef825c2d264caf7d, 0xfe68a8fe824a6e20, 0x00000018f33771e5],
    [0x74601c23750ce1eb, 0x28e2e69498336c51, 0x0000001ad61f6eeb],
    [0x84440d15355804c4, 0x42f3e34120124f3a, 0x0000000ab12a7873],
    [0xc828cada40b18bd9, 0xec09bc13453ce19d, 0x000000114079542d],
    [0x98015eced44d9217, 0x189c739be1cfcfc4, 0x00000001e969fbca],
    [0xa9b3caa86b859ebf, 0x360461c284290fba, 0x000000054614d388],
    [0x9c8789798f9e45f5, 0xa68e2550b652834b, 0x00000008c7298a96],
    [0xcb2c136039f1e6fb, 0xb37d0be0e9cc11ad, 0x00000007d55af0a5],
    [0x567d9ff09d2e4358, 0xa4ef65ec6bca6cb5, 0x0000000b4c3e6621],
    [0xdfef0550706a6d68, 0x8617a104ee462a18, 0x00000000000017b0],
    [0xd13454ca17aee7bf, 0x000065beee6ed136, 0x0000000000000000],
    [0xb7eb212cd0915e74, 0x000000000001b4fe, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000012d6a90000],
    [0x6b6aa0f775b1a1bd, 0xe92aeb29f3de2279, 0x000000176a5e05d0],
    [0xd978c88897ec498a, 0x919c8579f95dff5b, 0x0000000ce70d0ee4],
    [0xd247a2080c0dcf0a, 0x6a7efdb0d4dd06bc, 0x0000000fad0c99b7],
    [0x38c2dc1cde4a5666, 0x53ea47e2f858f3ee, 0x00000005de261943],
    [0xc889e08c5bbe8f90, 0x33ae18f70b4c27be, 0x0000000fcfefff99],
    [0x3dfabeeaa80fb408, 0xe9c257d063ecb50a, 0x00000014db228e43],
    [0x91147a8c6ba5b331, 0x9368ff140a8ba6fa, 0x0000001b1e6214d9],
    [0x1f78e7c228d3603c, 0x794efa03ba1a7acd, 0x0000000acbf70474],
    [0x4c558b51a26b8a71, 0x5f238f2857218b36, 0x000000111f78212e],
    [0xd2a5d1590b321b85, 0x8adb6ad47de6a0df, 0x00000012bd3b9449],
    [0x62028ae2ca531d16, 0x7bf52b5b263edc94, 0x00000004c56052d0],
    [0xaaa8f434c5ba62b0, 0x7dc5675d75e81d06, 0x000000045d099b94],
    [0x6f70bbc686ccdb94, 0xbda3c0cd39345160, 0x0000000dc028ab12],
    [0x5a9357f41f2ceafb, 0x0ef7993d8ddc9cdc, 0x0000001c7cf217bb],
    [0x56cbb13431435d8a, 0x5af691e91ca6b7b8, 0x000000185e3ae67a],
    [0x5c2d264caf7c2b90, 0xa8fe824a6e20ef82, 0x0000001706f0fe68],
    [0x1c23750ce1eaa8ae, 0xe69498336c517460, 0x0000001afb7228e2],
    [0x0d15355804c3daff, 0xe34120124f3a8444, 0x00000002443b42f3],
    [0xcada40b18bd8e3e6, 0xbc13453ce19dc828, 0x000000069fd8ec09],
    [0x5eced44d921667e4, 0x739be1cfcfc49801, 0x00000001052e189c],
    [0xcaa86b859ebe7b7a, 0x61c284290fbaa9b3, 0x000000034b273604],
    [0x89798f9e45f4ee8f, 0x2550b652834b9c87, 0x0000001d1d58a68e],
    [0x136039f1e6fa8507, 0x0be0e9cc11adcb2c, 0x00000019efd8b37d],
    [0x9ff09d2e4357b221, 0x65ec6bca6cb5567d, 0x000000058065a4ef],
    [0x0550706a6d675e0a, 0xa104ee462a18dfef, 0x0000000017b08617],
    [0x54ca17aee7befe85, 0x65beee6ed136d134, 0x0000000000000000],
    [0x212cd0915e7348eb, 0x00000001b4feb7eb, 0x0000000000000000],
    [0x54e113b91f745e5b, 0x0000000000000007, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000009fe260000],
    [0xa0f775b1a1bced76, 0xeb29f3de22796b6a, 0x00000006a401e92a],
    [0xc88897ec4989e071, 0x8579f95dff5bd978, 0x0000001d9140919c],
    [0xa2080c0dcf095686, 0xfdb0d4dd06bcd247, 0x00000018bed46a7e],
    [0xdc1cde4a56659b29, 0x47e2f858f3ee38c2, 0x0000000abba053ea],
    [0xe08c5bbe8f8fce1e, 0x18f70b4c27bec889, 0x0000000f725a33ae],
    [0xbeeaa80fb4073e32, 0x57d063ecb50a3dfa, 0x000000187245e9c2],
    [0x7a8c6ba5b3303b42, 0xff140a8ba6fa9114, 0x00000012635f9368],
    [0xe7c228d3603b9fe0, 0xfa03ba1a7acd1f78, 0x00000008477e794e],
    [0x8b51a26b8a70e8da, 0x8f2857218b364c55, 0x0000001548e55f23],
    [0xd1590b321b848672, 0x6ad47de6a0dfd2a5, 0x0000001b47d68adb],
    [0x8ae2ca531d158c15, 0x2b5b263edc946202, 0x0000001028c97bf5],
    [0xf434c5ba62af1a90, 0x675d75e81d06aaa8, 0x00000008530d7dc5],
    [0xbbc686ccdb93b045, 0xc0cd393451606f70, 0x0000001bd8a1bda3],
    [0x57f41f2ceafa7c8d, 0x993d8ddc9cdc5a93, 0x0000001b9b520ef7],
    [0xb13431435d898941, 0x91e91ca6b7b856cb, 0x0000001d74855af6],
    [0x264caf7c2b8f3b92, 0x824a6e20ef825c2d, 0x00000004cb87a8fe],
    [0x750ce1eaa8adcb3c, 0x98336c5174601c23, 0x0000000f29c4e694],
    [0x355804c3dafe461a, 0x20124f3a84440d15, 0x000000047c9be341],
    [0x40b18bd8e3e50962, 0x453ce19dc828cada, 0x000000067de6bc13],
    [0xd44d921667e33d81, 0xe1cfcfc498015ece, 0x0000000f7cad739b],
    [0x6b859ebe7b797369, 0x84290fbaa9b3caa8, 0x00000012cad261c2],
    [0x8f9e45f4ee8e8586, 0xb652834b9c878979, 0x00000016907b2550],
    [0x39f1e6fa8506d41a, 0xe9cc11adcb2c1360, 0x000000193e660be0],
    [0x9d2e4357b220c209, 0x6bca6cb5567d9ff0, 0x0000000125e565ec],
    [0x706a6d675e093f43, 0xee462a18dfef0550, 0x0000000ea700a104],
    [0x17aee7befe84d32e, 0xee6ed136d13454ca, 0x00000000000065be],
    [0xd0915e7348eaa0d6, 0x0001b4feb7eb212c, 0x0000000000000000],
    [0x13b91f745e5a32f1, 0x00000000000754e1, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000009c4920000],
    [0x75b1a1bced757da0, 0xf3de22796b6aa0f7, 0x0000001c6638eb29],
    [0x97ec4989e0700e09, 0xf95dff5bd978c888, 0x0000000b5e958579],
    [0x0c0dcf095685f1a5, 0xd4dd06bcd247a208, 0x000000170b13fdb0],
    [0xde4a56659b28583f, 0xf858f3ee38c2dc1c, 0x0000001bb79547e2],
    [0x5bbe8f8fce1dd3cf, 0x0b4c27bec889e08c, 0x00000012b7a318f7],
    [0xa80fb4073e319aac, 0x63ecb50a3dfabeea, 0x00000004aa8c57d0],
    [0x6ba5b3303b411637, 0x0a8ba6fa91147a8c, 0x00000000de24ff14],
    [0x28d3603b9fdf5e07, 0xba1a7acd1f78e7c2, 0x000000096478fa03],
    [0xa26b8a70e8d9dae2, 0x57218b364c558b51, 0x00000013ac1a8f28],
    [0x0b321b848671397a, 0x7de6a0dfd2a5d159, 0x0000001538ed6ad4],
    [0xca531d158c14fd37, 0x263edc9462028ae2, 0x00000015c2af2b5b],
    [0xc5ba62af1a8f0d56, 0x75e81d06aaa8f434, 0x00000011fae0675d],
    [0x86ccdb93b0449d99, 0x393451606f70bbc6, 0x0000000e54e9c0cd],
    [0x1f2ceafa7c8c15d5, 0x8ddc9cdc5a9357f4, 0x000000187928993d],
    [0x31435d89894056ac, 0x1ca6b7b856cbb134, 0x00000011546291e9],
    [0xaf7c2b8f3b916869, 0x6e20ef825c2d264c, 0x0000000bf90e824a],
    [0xe1eaa8adcb3bc89a, 0x6c5174601c23750c, 0x0000000443549833],
    [0x04c3dafe46196432, 0x4f3a84440d153558, 0x0000000e2ccf2012],
    [0x8bd8e3e509619311, 0xe19dc828cada40b1, 0x000000129524453c],
    [0x921667e33d806012, 0xcfc498015eced44d, 0x000000098f73e1cf],
    [0x9ebe7b797368c6b3, 0x0fbaa9b3caa86b85, 0x0000001336268429],
    [0x45f4ee8e85853851, 0x834b9c8789798f9e, 0x00000011b611b652],
    [0xe6fa8506d419d324, 0x11adcb2c136039f1, 0x00000011540de9cc],
    [0x4357b220c2087472, 0x6cb5567d9ff09d2e, 0x0000001056206bca],
    [0x6d675e093f429439, 0x2a18dfef0550706a, 0x00000019cd38ee46],
    [0xe7befe84d32da8f2, 0xd136d13454ca17ae, 0x0000000065beee6e],
    [0x5e7348eaa0d5133e, 0xb4feb7eb212cd091, 0x0000000000000001],
    [0x1f745e5a32f0ad4c, 0x0000000754e113b9, 0x0000000000000000],
    [0x7d228322baf5244a, 0x000000000000001f, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000015eadd0000],
    [0xa1bced757d9f56e2, 0x22796b6aa0f775b1, 0x00000015e2aff3de],
    [0x4989e0700e08f749, 0xff5bd978c88897ec, 0x00000015a8ccf95d],
    [0xcf095685f1a41e8c, 0x06bcd247a2080c0d, 0x00000014b600d4dd],
    [0x56659b28583e904e, 0xf3ee38c2dc1cde4a, 0x00000011bb34f858],
    [0x8f8fce1dd3cec609, 0x27bec889e08c5bbe, 0x000000194f740b4c],
    [0xb4073e319aabe8d1, 0xb50a3dfabeeaa80f, 0x00000002b68763ec],
    [0xb3303b41163656b1, 0xa6fa91147a8c6ba5, 0x000000062a500a8b],
    [0x603b9fdf5e06289c, 0x7acd1f78e7c228d3, 0x00000007cf5dba1a],
    [0x8a70e8d9dae1da3d, 0x8b364c558b51a26b, 0x00000017e5215721],
    [0x1b84867139797707, 0xa0dfd2a5d1590b32, 0x0000000ea2d87de6],
    [0x1d158c14fd36d76f, 0xdc9462028ae2ca53, 0x000000183da4263e],
    [0x62af1a8f0d554245, 0x1d06aaa8f434c5ba, 0x0000000c2e6375e8],
    [0xdb93b0449d988cbf, 0x51606f70bbc686cc, 0x0000001590263934],
    [0xeafa7c8c15d4b24d, 0x9cdc5a9357f41f2c, 0x0000000903c08ddc],
    [0x5d89894056abbe3e, 0xb7b856cbb1343143, 0x00000007ab1d1ca6],
    [0x2b8f3b9168681b16, 0xef825c2d264caf7c, 0x00000012f7126e20],
    [0xa8adcb3bc8998a7e, 0x74601c23750ce1ea, 0x0000000d9fdd6c51],
    [0xdafe46196431d576, 0x84440d15355804c3, 0x00000006ef234f3a],
    [0xe3e5096193108b4d, 0xc828cada40b18bd8, 0x0000000ff881e19d],
    [0x67e33d80601123e0, 0x98015eced44d9216, 0x0000000da894cfc4],
    [0x7b797368c6b20fa3, 0xa9b3caa86b859ebe, 0x000000119acb0fba],
    [0xee8e8585385014d5, 0x9c8789798f9e45f4, 0x0000000aa983834b],
    [0x8506d419d3234870, 0xcb2c136039f1e6fa, 0x0000000c6b2f11ad],
    [0xb220c20874714a11, 0x567d9ff09d2e4357, 0x00000005caa66cb5],
    [0x5e093f429438a930, 0xdfef0550706a6d67, 0x0000000cc35c2a18],
    [0xfe84d32da8f13373, 0xd13454ca17aee7be, 0x0000001d8101d136],
    [0x48eaa0d5133d4606, 0xb7eb212cd0915e73, 0x000000000001b4fe],
    [0x5e5a32f0ad4bce0f, 0x000754e113b91f74, 0x0000000000000000],
    [0x8322baf524497e40, 0x00000000001f7d22, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001c452c0000],
    [0xed757d9f56e1a7eb, 0x6b6aa0f775b1a1bc, 0x0000001562a82279],
    [0xe0700e08f74849d5, 0xd978c88897ec4989, 0x0000000e293cff5b],
    [0x5685f1a41e8ba048, 0xd247a2080c0dcf09, 0x00000019a9ba06bc],
    [0x9b28583e904d1bbe, 0x38c2dc1cde4a5665, 0x0000000e9e2df3ee],
    [0xce1dd3cec608ecf8, 0xc889e08c5bbe8f8f, 0x00000002627a27be],
    [0x3e319aabe8d0d25e, 0x3dfabeeaa80fb407, 0x0000001c898bb50a],
    [0x3b41163656b012e0, 0x91147a8c6ba5b330, 0x00000011f4e2a6fa],
    [0x9fdf5e06289b559a, 0x1f78e7c228d3603b, 0x0000000ca46c7acd],
    [0xe8d9dae1da3c3261, 0x4c558b51a26b8a70, 0x000000164f7c8b36],
    [0x8671397977061f98, 0xd2a5d1590b321b84, 0x00000004bee9a0df],
    [0x8c14fd36d76e05a6, 0x62028ae2ca531d15, 0x000000018d5cdc94],
    [0x1a8f0d554244c5a8, 0xaaa8f434c5ba62af, 0x0000001673fe1d06],
    [0xb0449d988cbef908, 0x6f70bbc686ccdb93, 0x0000001580b75160],
    [0x7c8c15d4b24c0db4, 0x5a9357f41f2ceafa, 0x0000000d1e119cdc],
    [0x894056abbe3d4d6c, 0x56cbb13431435d89, 0x000000008cabb7b8],
    [0x3b9168681b15434c, 0x5c2d264caf7c2b8f, 0x000000166098ef82],
    [0xcb3bc8998a7d960c, 0x1c23750ce1eaa8ad, 0x0000000fd8297460],
    [0x46196431d57561de, 0x0d15355804c3dafe, 0x000000097f6a8444],
    [0x096193108b4c1c2f, 0xcada40b18bd8e3e5, 0x0000000051adc828],
    [0x3d80601123df543c, 0x5eced44d921667e3, 0x0000000c0f059801],
    [0x7368c6b20fa2933a, 0xcaa86b859ebe7b79, 0x00000001c13da9b3],
    [0x8585385014d4d9e2, 0x89798f9e45f4ee8e, 0x0000000a431d9c87],
    [0xd419d323486ff678, 0x136039f1e6fa8506, 0x0000001d3fd1cb2c],
    [0xc20874714a10d2c5, 0x9ff09d2e4357b220, 0x00000019d95a567d],
    [0x3f429438a92f9937, 0x0550706a6d675e09, 0x0000000c2f2edfef],
    [0xd32da8f1337226df, 0x54ca17aee7befe84, 0x00000018f16bd134],
    [0xa0d5133d46052999, 0x212cd0915e7348ea, 0x00000001b4feb7eb],
    [0x32f0ad4bce0e56e1, 0x54e113b91f745e5a, 0x0000000000000007],
    [0xbaf524497e3ff3e1, 0x0000001f7d228322, 0x0000000000000000],
    [0x3e4f75e2224e685b, 0x0000000000000087, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000018d3920000],
    [0x7d9f56e1a7ea032e, 0xa0f775b1a1bced75, 0x0000001c1f3f6b6a],
    [0x0e08f74849d41e7a, 0xc88897ec4989e070, 0x00000010ada7d978],
    [0xf1a41e8ba0470d54, 0xa2080c0dcf095685, 0x0000000f9127d247],
    [0x583e904d1bbd2234, 0xdc1cde4a56659b28, 0x000000024cb938c2],
    [0xd3cec608ecf73267, 0xe08c5bbe8f8fce1d, 0x0000001c9437c889],
    [0x9aabe8d0d25d15e8, 0xbeeaa80fb4073e31, 0x00000004c4a03dfa],
    [0x163656b012dffc72, 0x7a8c6ba5b3303b41, 0x0000001c26849114],
    [0x5e06289b559911a4, 0xe7c228d3603b9fdf, 0x00000013ead51f78],
    [0xdae1da3c3260fdde, 0x8b51a26b8a70e8d9, 0x00000008ce1d4c55],
    [0x397977061f97ee42, 0xd1590b321b848671, 0x00000000978bd2a5],
    [0xfd36d76e05a5fa73, 0x8ae2ca531d158c14, 0x00000009890b6202],
    [0x0d554244c5a7ce33, 0xf434c5ba62af1a8f, 0x0000001a3f70aaa8],
    [0x9d988cbef907a59d, 0xbbc686ccdb93b044, 0x0000000480f76f70],
    [0x15d4b24c0db33059, 0x57f41f2ceafa7c8c, 0x000000119f9b5a93],
    [0x56abbe3d4d6b6667, 0xb13431435d898940, 0x0000000a832056cb],
    [0x68681b15434bdb26, 0x264caf7c2b8f3b91, 0x00000008416a5c2d],
    [0xc8998a7d960bec89, 0x750ce1eaa8adcb3b, 0x00000004f01e1c23],
    [0x6431d57561dd7df4, 0x355804c3dafe4619, 0x00000015037b0d15],
    [0x93108b4c1c2ef72f, 0x40b18bd8e3e50961, 0x000000125a97cada],
    [0x601123df543b3d9a, 0xd44d921667e33d80, 0x0000000969385ece],
    [0xc6b20fa29339ad96, 0x6b859ebe7b797368, 0x0000001c4d99caa8],
    [0x385014d4d9e1cb6d, 0x8f9e45f4ee8e8585, 0x0000001667898979],
    [0xd323486ff677328d, 0x39f1e6fa8506d419, 0x0000001a38511360],
    [0x74714a10d2c43481, 0x9d2e4357b220c208, 0x00000012ba8b9ff0],
    [0x9438a92f993683cf, 0x706a6d675e093f42, 0x0000001140420550],
    [0xa8f1337226de2f1f, 0x17aee7befe84d32d, 0x0000000a6f2a54ca],
    [0x133d46052998526a, 0xd0915e7348eaa0d5, 0x000000169a3e212c],
    [0xad4bce0e56e05068, 0x13b91f745e5a32f0, 0x00000000000754e1],
    [0x24497e3ff3e00c58, 0x001f7d228322baf5, 0x0000000000000000],
    [0x75e2224e685a7745, 0x0000000000873e4f, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001bd05b0000],
    [0x56e1a7ea032d4ad6, 0x75b1a1bced757d9f, 0x000000020035a0f7],
    [0xf74849d41e794511, 0x97ec4989e0700e08, 0x00000001dfa4c888],
    [0x1e8ba0470d53578e, 0x0c0dcf095685f1a4, 0x00000006b8afa208],
    [0x904d1bbd2233430f, 0xde4a56659b28583e, 0x00000002e09ddc1c],
    [0xc608ecf73266fbbd, 0x5bbe8f8fce1dd3ce, 0x00000018d538e08c],
    [0xe8d0d25d15e74387, 0xa80fb4073e319aab, 0x00000002e451beea],
    [0x56b012dffc71c668, 0x6ba5b3303b411636, 0x0000000f67697a8c],
    [0x289b559911a38070, 0x28d3603b9fdf5e06, 0x0000001301cae7c2],
    [0xda3c3260fddda8f6, 0xa26b8a70e8d9dae1, 0x00000014bb6b8b51],
    [0x77061f97ee4109cb, 0x0b321b8486713979, 0x00000017005cd159],
    [0xd76e05a5fa72f687, 0xca531d158c14fd36, 0x0000000c497a8ae2],
    [0x4244c5a7ce323746, 0xc5ba62af1a8f0d55, 0x000000106bb5f434],
    [0x8cbef907a59cb0ae, 0x86ccdb93b0449d98, 0x0000001b0965bbc6],
    [0xb24c0db33058f04a, 0x1f2ceafa7c8c15d4, 0x0000000c26e957f4],
    [0xbe3d4d6b6666dd5f, 0x31435d89894056ab, 0x00000011dacfb134],
    [0x1b15434bdb2563d4, 0xaf7c2b8f3b916868, 0x00000002ffdb264c],
    [0x8a7d960bec88f427, 0xe1eaa8adcb3bc899, 0x000000147e51750c],
    [0xd57561dd7df33154, 0x04c3dafe46196431, 0x0000000b89303558],
    [0x8b4c1c2ef72e1eb9, 0x8bd8e3e509619310, 0x000000120f9240b1],
    [0x23df543b3d9935dc, 0x921667e33d806011, 0x000000014efbd44d],
    [0x0fa29339ad953ed8, 0x9ebe7b797368c6b2, 0x000000070c6d6b85],
    [0x14d4d9e1cb6ca21c, 0x45f4ee8e85853850, 0x0000001a851a8f9e],
    [0x486ff677328c887d, 0xe6fa8506d419d323, 0x0000000ac57e39f1],
    [0x4a10d2c4348044e4, 0x4357b220c2087471, 0x00000018c7909d2e],
    [0xa92f993683ce2e92, 0x6d675e093f429438, 0x0000000aebc5706a],
    [0x337226de2f1e19b8, 0xe7befe84d32da8f1, 0x000000040b4517ae],
    [0x460529985269ccc6, 0x5e7348eaa0d5133d, 0x0000000d4cc9d091],
    [0xce0e56e050674140, 0x1f745e5a32f0ad4b, 0x0000000754e113b9],
    [0x7e3ff3e00c57550f, 0x7d228322baf52449, 0x000000000000001f],
    [0x224e685a7744a6e9, 0x000000873e4f75e2, 0x0000000000000000],
    [0xddb0db666656f88d, 0x0000000000000244, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000b8e490000],
    [0xa7ea032d4ad5ab07, 0xa1bced757d9f56e1, 0x00000019366c75b1],
    [0x49d41e7945106308, 0x4989e0700e08f748, 0x00000003371097ec],
    [0xa0470d53578dd4e8, 0xcf095685f1a41e8b, 0x000000114edc0c0d],
    [0x1bbd2233430e2aec, 0x56659b28583e904d, 0x0000000e90e9de4a],
    [0xecf73266fbbc7a4a, 0x8f8fce1dd3cec608, 0x00000003a7fc5bbe],
    [0xd25d15e74386ea22, 0xb4073e319aabe8d0, 0x00000008c717a80f],
    [0x12dffc71c667f233, 0xb3303b41163656b0, 0x0000001369976ba5],
    [0x559911a3806f8f26, 0x603b9fdf5e06289b, 0x0000001909ee28d3],
    [0x3260fddda8f54475, 0x8a70e8d9dae1da3c, 0x0000000baaa3a26b],
    [0x1f97ee4109cafbcd, 0x1b84867139797706, 0x0000001359f50b32],
    [0x05a5fa72f686272f, 0x1d158c14fd36d76e, 0x0000000d980bca53],
    [0xc5a7ce323745e0c2, 0x62af1a8f0d554244, 0x00000011e513c5ba],
    [0xf907a59cb0ad0ff8, 0xdb93b0449d988cbe, 0x0000000a755086cc],
    [0x0db33058f0496bcc, 0xeafa7c8c15d4b24c, 0x0000000faf4a1f2c],
    [0x4d6b6666dd5ed301, 0x5d89894056abbe3d, 0x0000001ce91e3143],
    [0x434bdb2563d3ef40, 0x2b8f3b9168681b15, 0x00000018d55daf7c],
    [0x960bec88f426b2d6, 0xa8adcb3bc8998a7d, 0x0000000fcc7fe1ea],
    [0x61dd7df33153fc0e, 0xdafe46196431d575, 0x00000014b24504c3],
    [0x1c2ef72e1eb8ec53, 0xe3e5096193108b4c, 0x00000005377d8bd8],
    [0x543b3d9935dbdf18, 0x67e33d80601123df, 0x0000000e8c3c9216],
    [0x9339ad953ed7880f, 0x7b797368c6b20fa2, 0x0000001b39ae9ebe],
    [0xd9e1cb6ca21bf25d, 0xee8e8585385014d4, 0x0000001c86bd45f4],
    [0xf677328c887cf566, 0x8506d419d323486f, 0x000000146b13e6fa],
    [0xd2c4348044e3fbda, 0xb220c20874714a10, 0x00000018112c4357],
    [0x993683ce2e915c7a, 0x5e093f429438a92f, 0x0000000eaabf6d67],
    [0x26de2f1e19b782b1, 0xfe84d32da8f13372, 0x0000001ad782e7be],
    [0x29985269ccc580ff, 0x48eaa0d5133d4605, 0x0000001b181b5e73],
    [0x56e05067413f5609, 0x5e5a32f0ad4bce0e, 0x0000000809171f74],
    [0xf3e00c57550e0c52, 0x8322baf524497e3f, 0x00000000001f7d22],
    [0x685a7744a6e804a3, 0x00873e4f75e2224e, 0x0000000000000000],
    [0xdb666656f88c4021, 0x000000000244ddb0, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000e2f910000],
    [0x032d4ad5ab06983a, 0xed757d9f56e1a7ea, 0x000000024cb2a1bc],
    [0x1e7945106307c35c, 0xe0700e08f74849d4, 0x000000022c964989],
    [0x0d53578dd4e72fb8, 0x5685f1a41e8ba047, 0x00000017a831cf09],
    [0x2233430e2aebcb3f, 0x9b28583e904d1bbd, 0x00000003ae0f5665],
    [0x3266fbbc7a49aa4d, 0xce1dd3cec608ecf7, 0x00000001afb68f8f],
    [0x15e74386ea215683, 0x3e319aabe8d0d25d, 0x0000000b3ad1b407],
    [0xfc71c667f2321b3d, 0x3b41163656b012df, 0x0000000de1e5b330],
    [0x11a3806f8f25791d, 0x9fdf5e06289b5599, 0x0000001a49ef603b],
    [0xfddda8f544743ee2, 0xe8d9dae1da3c3260, 0x000000010db88a70],
    [0xee4109cafbcc06af, 0x8671397977061f97, 0x0000000504501b84],
    [0xfa72f686272e0dc5, 0x8c14fd36d76e05a5, 0x0000000af79a1d15],
    [0xce323745e0c19af4, 0x1a8f0d554244c5a7, 0x00000004958762af],
    [0xa59cb0ad0ff78e1f, 0xb0449d988cbef907, 0x0000001c84c3db93],
    [0x3058f0496bcb8b9a, 0x7c8c15d4b24c0db3, 0x000000023865eafa],
    [0x6666dd5ed300cd47, 0x894056abbe3d4d6b, 0x000000038bf05d89],
    [0xdb2563d3ef3fd56d, 0x3b9168681b15434b, 0x0000000aa9872b8f],
    [0xec88f426b2d5cc61, 0xcb3bc8998a7d960b, 0x0000001d6681a8ad],
    [0x7df33153fc0d46a4, 0x46196431d57561dd, 0x000000178640dafe],
    [0xf72e1eb8ec52ee7f, 0x096193108b4c1c2e, 0x000000171b2de3e5],
    [0x3d9935dbdf1788d1, 0x3d80601123df543b, 0x0000001c470867e3],
    [0xad953ed7880e4da9, 0x7368c6b20fa29339, 0x00000003618d7b79],
    [0xcb6ca21bf25cd7e0, 0x8585385014d4d9e1, 0x000000019702ee8e],
    [0x328c887cf565951f, 0xd419d323486ff677, 0x00000007a0868506],
    [0x348044e3fbd98a69, 0xc20874714a10d2c4, 0x00000002272bb220],
    [0x83ce2e915c793cb6, 0x3f429438a92f9936, 0x000000011f965e09],
    [0x2f1e19b782b0dd81, 0xd32da8f1337226de, 0x00000018d389fe84],
    [0x5269ccc580fe85bc, 0xa0d5133d46052998, 0x00000015004748ea],
    [0x5067413f5608f96f, 0x32f0ad4bce0e56e0, 0x0000000816165e5a],
    [0x0c57550e0c51663c, 0xbaf524497e3ff3e0, 0x00000001afbd8322],
    [0x7744a6e804a291cd, 0x3e4f75e2224e685a, 0x0000000000000087],
    [0x6656f88c402026e8, 0x00000244ddb0db66, 0x0000000000000000],
    [0xcce62836ac5774ef, 0x00000000000009be, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000001b5afe0000],
    [0x4ad5ab069839610f, 0x7d9f56e1a7ea032d, 0x0000001a16fced75],
    [0x45106307c35b386c, 0x0e08f74849d41e79, 0x000000016248e070],
    [0x578dd4e72fb75fc1, 0xf1a41e8ba0470d53, 0x0000000964bb5685],
    [0x430e2aebcb3ef5d3, 0x583e904d1bbd2233, 0x00000006f1d99b28],
    [0xfbbc7a49aa4c5975, 0xd3cec608ecf73266, 0x0000000b8ca3ce1d],
    [0x4386ea215682bc3a, 0x9aabe8d0d25d15e7, 0x0000000f27793e31],
    [0xc667f2321b3cb6bd, 0x163656b012dffc71, 0x0000001634553b41],
    [0x806f8f25791c4c68, 0x5e06289b559911a3, 0x00000014ebc69fdf],
    [0xa8f544743ee1a847, 0xdae1da3c3260fddd, 0x0000001a5cb4e8d9],
    [0x09cafbcc06aeadff, 0x397977061f97ee41, 0x00000004e30c8671],
    [0xf686272e0dc4d294, 0xfd36d76e05a5fa72, 0x00000003812c8c14],
    [0x3745e0c19af3bbd8, 0x0d554244c5a7ce32, 0x0000000ff9cf1a8f],
    [0xb0ad0ff78e1e947b, 0x9d988cbef907a59c, 0x00000002d056b044],
    [0xf0496bcb8b99eb44, 0x15d4b24c0db33058, 0x0000000efae07c8c],
    [0xdd5ed300cd46bbbf, 0x56abbe3d4d6b6666, 0x000000040d968940],
    [0x63d3ef3fd56cc3fd, 0x68681b15434bdb25, 0x0000000deb613b91],
    [0xf426b2d5cc60b566, 0xc8998a7d960bec88, 0x00000005e971cb3b],
    [0x3153fc0d46a3b494, 0x6431d57561dd7df3, 0x00000016b7e44619],
    [0x1eb8ec52ee7e2b40, 0x93108b4c1c2ef72e, 0x00000000165e0961],
    [0x35dbdf1788d07d9c, 0x601123df543b3d99, 0x0000001865253d80],
    [0x3ed7880e4da8a673, 0xc6b20fa29339ad95, 0x0000000137227368],
    [0xa21bf25cd7df13a3, 0x385014d4d9e1cb6c, 0x0000000603468585],
    [0x887cf565951ebfc9, 0xd323486ff677328c, 0x00000001f7f2d419],
    [0x44e3fbd98a685448, 0x74714a10d2c43480, 0x0000000f806ac208],
    [0x2e915c793cb55ec6, 0x9438a92f993683ce, 0x0000000aa18b3f42],
    [0x19b782b0dd803f1f, 0xa8f1337226de2f1e, 0x00000013cedfd32d],
    [0xccc580fe85bb90a5, 0x133d460529985269, 0x0000001a3c11a0d5],
    [0x413f5608f96e19cd, 0xad4bce0e56e05067, 0x0000001b463132f0],
    [0x550e0c51663b0c5b, 0x24497e3ff3e00c57, 0x000000128036baf5],
    [0xa6e804a291cc35ee, 0x75e2224e685a7744, 0x0000000000873e4f],
    [0xf88c402026e7087f, 0x0244ddb0db666656, 0x0000000000000000],
    [0x2836ac5774ee3680, 0x0000000009becce6, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x000000074bf90000],
    [0xab069839610e7c8a, 0x56e1a7ea032d4ad5, 0x0000000216697d9f],
    [0x6307c35b386b12a4, 0xf74849d41e794510, 0x0000000868e10e08],
    [0xd4e72fb75fc0f1d3, 0x1e8ba0470d53578d, 0x0000000e9115f1a4],
    [0x2aebcb3ef5d2ff36, 0x904d1bbd2233430e, 0x000000125745583e],
    [0x7a49aa4c597403c9, 0xc608ecf73266fbbc, 0x0000000a3934d3ce],
    [0xea215682bc399cb9, 0xe8d0d25d15e74386, 0x0000000ca6d59aab],
    [0xf2321b3cb6bcc241, 0x56b012dffc71c667, 0x000000016f151636],
    [0x8f25791c4c6755dc, 0x289b559911a3806f, 0x00000016c8765e06],
    [0x44743ee1a8463d17, 0xda3c3260fddda8f5, 0x0000001c47dfdae1],
    [0xfbcc06aeadfee2c0, 0x77061f97ee4109ca, 0x0000000cc4cf3979],
    [0x272e0dc4d293b91a, 0xd76e05a5fa72f686, 0x00000013d9d2fd36],
    [0xe0c19af3bbd7cacb, 0x4244c5a7ce323745, 0x00000005b7480d55],
    [0x0ff78e1e947a2cb0, 0x8cbef907a59cb0ad, 0x00000013b84d9d98],
    [0x6bcb8b99eb439718, 0xb24c0db33058f049, 0x0000000a2f4b15d4],
    [0xd300cd46bbbe0500, 0xbe3d4d6b6666dd5e, 0x000000183d3056ab],
    [0xef3fd56cc3fc0476, 0x1b15434bdb2563d3, 0x00000005f25c6868],
    [0xb2d5cc60b5658bbe, 0x8a7d960bec88f426, 0x0000000b9a53c899],
    [0xfc0d46a3b49382d8, 0xd57561dd7df33153, 0x00000003da1b6431],
    [0xec52ee7e2b3fcc84, 0x8b4c1c2ef72e1eb8, 0x00000003fda19310],
    [0xdf1788d07d9b96ed, 0x23df543b3d9935db, 0x0000000ba7df6011],
    [0x880e4da8a6724000, 0x0fa29339ad953ed7, 0x00000012a538c6b2],
    [0xf25cd7df13a29519, 0x14d4d9e1cb6ca21b, 0x0000000837073850],
    [0xf565951ebfc881d8, 0x486ff677328c887c, 0x0000001a6091d323],
    [0xfbd98a685447daa8, 0x4a10d2c4348044e3, 0x0000000d31407471],
    [0x5c793cb55ec511b3, 0xa92f993683ce2e91, 0x0000001a5b4d9438],
    [0x82b0dd803f1eaf7d, 0x337226de2f1e19b7, 0x0000000e442fa8f1],
    [0x80fe85bb90a43f33, 0x460529985269ccc5, 0x00000011a653133d],
    [0x5608f96e19cc7b17, 0xce0e56e05067413f, 0x000000111c88ad4b],
    [0x0c51663b0c5ae5f8, 0x7e3ff3e00c57550e, 0x00000016d93e2449],
    [0x04a291cc35eddfd0, 0x224e685a7744a6e8, 0x0000001008bb75e2],
    [0x402026e7087e866f, 0xddb0db666656f88c, 0x0000000000000244],
    [0xac5774ee367f9431, 0x000009becce62836, 0x0000000000000000],
    [0x1608ce3b49886bcb, 0x00000000000029db, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000016bcbf0000],
    [0x9839610e7c895746, 0xa7ea032d4ad5ab06, 0x00000010d4b956e1],
    [0xc35b386b12a37dd4, 0x49d41e7945106307, 0x00000002b4f7f748],
    [0x2fb75fc0f1d2752a, 0xa0470d53578dd4e7, 0x00000011f4041e8b],
    [0xcb3ef5d2ff35a10c, 0x1bbd2233430e2aeb, 0x000000021402904d],
    [0xaa4c597403c835cf, 0xecf73266fbbc7a49, 0x00000012d159c608],
    [0x5682bc399cb8e416, 0xd25d15e74386ea21, 0x0000000b316ae8d0],
    [0x1b3cb6bcc240d017, 0x12dffc71c667f232, 0x000000065d4156b0],
    [0x791c4c6755db3d34, 0x559911a3806f8f25, 0x0000000e0402289b],
    [0x3ee1a8463d16404b, 0x3260fddda8f54474, 0x000000016cfbda3c],
    [0x06aeadfee2bf7e87, 0x1f97ee4109cafbcc, 0x000000199dd37706],
    [0x0dc4d293b919082d, 0x05a5fa72f686272e, 0x000000100322d76e],
    [0x9af3bbd7caca0481, 0xc5a7ce323745e0c1, 0x0000000ea9784244],
    [0x8e1e947a2caf8230, 0xf907a59cb0ad0ff7, 0x00000011b5248cbe],
    [0x8b99eb4397173df2, 0x0db33058f0496bcb, 0x0000000e45e8b24c],
    [0xcd46bbbe04ffe34e, 0x4d6b6666dd5ed300, 0x00000004f35dbe3d],
    [0xd56cc3fc0475fcbb, 0x434bdb2563d3ef3f, 0x0000001d3d841b15],
    [0xcc60b5658bbd1598, 0x960bec88f426b2d5, 0x0000001b54878a7d],
    [0x46a3b49382d73b5c, 0x61dd7df33153fc0d, 0x00000011b883d575],
    [0xee7e2b3fcc83a0a1, 0x1c2ef72e1eb8ec52, 0x00000016320d8b4c],
    [0x88d07d9b96ecf15a, 0x543b3d9935dbdf17, 0x000000080cd623df],
    [0x4da8a6723fff505f, 0x9339ad953ed7880e, 0x00000013c1850fa2],
    [0xd7df13a295189c30, 0xd9e1cb6ca21bf25c, 0x0000001a118014d4],
    [0x951ebfc881d7e2fb, 0xf677328c887cf565, 0x00000003eabf486f],
    [0x8a685447daa72178, 0xd2c4348044e3fbd9, 0x0000000b15174a10],
    [0x3cb55ec511b2b120, 0x993683ce2e915c79, 0x0000001a93faa92f],
    [0xdd803f1eaf7c0fed, 0x26de2f1e19b782b0, 0x0000000133b53372],
    [0x85bb90a43f3274ba, 0x29985269ccc580fe, 0x0000000356b14605],
    [0xf96e19cc7b1670e5, 0x56e05067413f5608, 0x0000000ee3dfce0e],
    [0x663b0c5ae5f77b82, 0xf3e00c57550e0c51, 0x0000001241757e3f],
    [0x91cc35eddfcf0997, 0x685a7744a6e804a2, 0x0000000b601b224e],
    [0x26e7087e866eaa71, 0xdb666656f88c4020, 0x000000000244ddb0],
    [0x74ee367f9430aec4, 0x09becce62836ac57, 0x0000000000000000],
    [0xce3b49886bcabcaf, 0x0000000029db1608, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000018aed50000],
    [0x610e7c895745fbd2, 0x032d4ad5ab069839, 0x0000001395e2a7ea],
    [0x386b12a37dd3b17c, 0x1e7945106307c35b, 0x000000108b0849d4],
    [0x5fc0f1d27529582b, 0x0d53578dd4e72fb7, 0x0000000e3bd8a047],
    [0xf5d2ff35a10beccb, 0x2233430e2aebcb3e, 0x0000001bc0b01bbd],
    [0x597403c835cec08e, 0x3266fbbc7a49aa4c, 0x00000015ac54ecf7],
    [0xbc399cb8e41556ab, 0x15e74386ea215682, 0x000000165937d25d],
    [0xb6bcc240d016f615, 0xfc71c667f2321b3c, 0x00000005d63912df],
    [0x4c6755db3d33d7f8, 0x11a3806f8f25791c, 0x0000001695275599],
    [0xa8463d16404a362c, 0xfddda8f544743ee1, 0x0000000592613260],
    [0xadfee2bf7e869d62, 0xee4109cafbcc06ae, 0x00000008d7af1f97],
    [0xd293b919082c552d, 0xfa72f686272e0dc4, 0x00000009449705a5],
    [0xbbd7caca04807a9c, 0xce323745e0c19af3, 0x00000001c7cac5a7],
    [0x947a2caf822faf35, 0xa59cb0ad0ff78e1e, 0x0000000beb17f907],
    [0xeb4397173df121a5, 0x3058f0496bcb8b99, 0x00000019018a0db3],
    [0xbbbe04ffe34dd889, 0x6666dd5ed300cd46, 0x00000011a95f4d6b],
    [0xc3fc0475fcba1873, 0xdb2563d3ef3fd56c, 0x00000002c6b9434b],
    [0xb5658bbd15972099, 0xec88f426b2d5cc60, 0x00000015c48e960b],
    [0xb49382d73b5b2759, 0x7df33153fc0d46a3, 0x0000000aef5d61dd],
    [0x2b3fcc83a0a0a28e, 0xf72e1eb8ec52ee7e, 0x0000000dcb041c2e],
    [0x7d9b96ecf15998a2, 0x3d9935dbdf1788d0, 0x0000000d6de1543b],
    [0xa6723fff505e84fe, 0xad953ed7880e4da8, 0x00000016c5039339],
    [0x13a295189c2f3155, 0xcb6ca21bf25cd7df, 0x0000001bc0b8d9e1],
    [0xbfc881d7e2fa5436, 0x328c887cf565951e, 0x0000000fe156f677],
    [0x5447daa7217750f8, 0x348044e3fbd98a68, 0x0000000cb156d2c4],
    [0x5ec511b2b11fb126, 0x83ce2e915c793cb5, 0x00000015edce9936],
    [0x3f1eaf7c0fece459, 0x2f1e19b782b0dd80, 0x00000005a9b326de],
    [0x90a43f3274b915e2, 0x5269ccc580fe85bb, 0x000000166cc42998],
    [0x19cc7b1670e45a0a, 0x5067413f5608f96e, 0x000000165ceb56e0],
    [0x0c5ae5f77b81c16c, 0x0c57550e0c51663b, 0x00000015102ff3e0],
    [0x35eddfcf0996d779, 0x7744a6e804a291cc, 0x00000017d780685a],
    [0x087e866eaa70e7b5, 0x6656f88c402026e7, 0x0000000e9f31db66],
    [0x367f9430aec32bf0, 0xcce62836ac5774ee, 0x00000000000009be],
    [0x49886bcabcae02be, 0x000029db1608ce3b, 0x0000000000000000],
    [0xf1ba87bc86968f49, 0x000000000000b3c4, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x0000000a8ba20000],
    [0x7c895745fbd18be9, 0x4ad5ab069839610e, 0x0000001c3c3e032d],
    [0x12a37dd3b17bcf2f, 0x45106307c35b386b, 0x0000001367921e79],
    [0xf1d27529582aa77b, 0x578dd4e72fb75fc0, 0x0000000bef730d53],
    [0xff35a10becca36ff, 0x430e2aebcb3ef5d2, 0x00000017fa492233],
    [0x03c835cec08db159, 0xfbbc7a49aa4c5974, 0x000000180b003266],
    [0x9cb8e41556aa411c, 0x4386ea215682bc39, 0x0000001a7d8515e7],
    [0xc240d016f6149185, 0xc667f2321b3cb6bc, 0x000000084410fc71],
    [0x55db3d33d7f74520, 0x806f8f25791c4c67, 0x00000015ce9211a3],
    [0x3d16404a362bcc6a, 0xa8f544743ee1a846, 0x0000000f2494fddd],
    [0xe2bf7e869d610340, 0x09cafbcc06aeadfe, 0x0000001ac453ee41],
    [0xb919082c552c95b0, 0xf686272e0dc4d293, 0x0000000bb119fa72],
    [0xcaca04807a9bc215, 0x3745e0c19af3bbd7, 0x00000006ae10ce32],
    [0x2caf822faf340cc7, 0xb0ad0ff78e1e947a, 0x00000014b527a59c],
    [0x97173df121a4e393, 0xf0496bcb8b99eb43, 0x00000017f3373058],
    [0x04ffe34dd888ed66, 0xdd5ed300cd46bbbe, 0x00000008b49d6666],
    [0x0475fcba18724ae5, 0x63d3ef3fd56cc3fc, 0x0000000215aedb25],
    [0x8bbd159720986dd4, 0xf426b2d5cc60b565, 0x0000001ad204ec88],
    [0x82d73b5b2758e63f, 0x3153fc0d46a3b493, 0x0000000abcf77df3],
    [0xcc83a0a0a28ddc38, 0x1eb8ec52ee7e2b3f, 0x00000005dea7f72e],
    [0x96ecf15998a10a10, 0x35dbdf1788d07d9b, 0x00000004f2543d99],
    [0x3fff505e84fd38c7, 0x3ed7880e4da8a672, 0x000000194b0bad95],
    [0x95189c2f31542ee2, 0xa21bf25cd7df13a2, 0x00000002eb08cb6c],
    [0x81d7e2fa5435eb9c, 0x887cf565951ebfc8, 0x00000000100a328c],
    [0xdaa7217750f77623, 0x44e3fbd98a685447, 0x0000001234013480],
    [0x11b2b11fb1252436, 0x2e915c793cb55ec5, 0x00000007022083ce],
    [0xaf7c0fece458897b, 0x19b782b0dd803f1e, 0x00000018a22a2f1e],
    [0x3f3274b915e10155, 0xccc580fe85bb90a4, 0x000000180a785269],
    [0x7b1670e45a0927cc, 0x413f5608f96e19cc, 0x0000001455685067],
    [0xe5f77b81c16b2ed8, 0x550e0c51663b0c5a, 0x0000000ffbfa0c57],
    [0xdfcf0996d778cb29, 0xa6e804a291cc35ed, 0x000000143fde7744],
    [0x866eaa70e7b457f6, 0xf88c402026e7087e, 0x00000017c9096656],
    [0x9430aec32befa783, 0x2836ac5774ee367f, 0x0000000009becce6],
    [0x6bcabcae02bdbc94, 0x29db1608ce3b4988, 0x0000000000000000],
    [0x87bc86968f48a48a, 0x00000000b3c4f1ba, 0x0000000000000000],
    [0x0000000000000000, 0x0000000000000000, 0x00000013f2370000],
    [0x5745fbd18be819f5, 0xab069839610e7c89, 0x00000003d0bb4ad5],
    [0x7dd3b17bcf2e3f01, 0x6307c35b386b12a3, 0x00000003386e4510],
    [0x7529582aa77abcbd, 0xd4e72fb75fc0f1d2, 0x000000034c75578d],
    [0xa10becca36feb44b, 0x2aebcb3ef5d2ff35, 0x0000000e14c0430e],
    [0x35cec08db158ab72, 0x7a49aa4c597403c8, 0x000000019c23fbbc],
    [0xe41556aa411b1983, 0xea215682bc399cb8, 0x0000001833ab4386],
    [0xd016f6149184a517, 0xf2321b3cb6bcc240, 0x00000019f971c667],
    [0x3d33d7f7451f88f9, 0x8f25791c4c6755db, 0x0000001b4dae806f],
    [0x404a362bcc69830a, 0x44743ee1a8463d16, 0x00000011755ea8f5],
    [0x7e869d61033fd137, 0xfbcc06aeadfee2bf, 0x000000016ec009ca],
    [0x082c552c95af4069, 0x272e0dc4d293b919, 0x00000010450cf686],
    [0x04807a9bc2144d53, 0xe0c19af3bbd7caca, 0x0000000a7ded3745],
    [0x822faf340cc66497, 0x0ff78e1e947a2caf, 0x00000011183cb0ad],
    [0x3df121a4e3922189, 0x6bcb8b99eb439717, 0x0000001613f6f049],
    [0xe34dd888ed650270, 0xd300cd46bbbe04ff, 0x000000138ae3dd5e],
    [0xfcba18724ae445f2, 0xef3fd56cc3fc0475, 0x00000009029d63d3],
    [0x159720986dd388d5, 0xb2d5cc60b5658bbd, 0x000000138ddef426],
    [0x3b5b2758e63ecc8b, 0xfc0d46a3b49382d7, 0x0000000d40e23153],
    [0xa0a0a28ddc374b28, 0xec52ee7e2b3fcc83, 0x0000001563f71eb8],
    [0xf15998a10a0f3eaf, 0xdf1788d07d9b96ec, 0x00000014614835db],
    [0x505e84fd38c6031a, 0x880e4da8a6723fff, 0x0000000681c13ed7],
    [0x9c2f31542ee12970, 0xf25cd7df13a29518, 0x0000001d181ca21b],
    [0xe2fa5435eb9bd33a, 0xf565951ebfc881d7, 0x00000017477f887c],
    [0x217750f77622b6b9, 0xfbd98a685447daa7, 0x000000040acf44e3],
    [0xb11fb12524350f18, 0x5c793cb55ec511b2, 0x0000000cecaf2e91],
    [0x0fece458897a0e13, 0x82b0dd803f1eaf7c, 0x000000102ec119b7],
    [0x74b915e10154d174, 0x80fe85bb90a43f32, 0x0000000ebf1fccc5],
    [0x70e45a0927cb97e2, 0x5608f96e19cc7b16, 0x000000034555413f],
    [0x7b81c16b2ed736b9, 0x0c51663b0c5ae5f7, 0x0000001837f6550e],
    [0x0996d778cb280d1e, 0x04a291cc35eddfcf, 0x00000002da2fa6e8],
    [0xaa70e7b457f5b30a, 0x402026e7087e866e, 0x0000000cbac6f88c],
    [0xaec32befa7825303, 0xac5774ee367f9430, 0x0000001535272836],
    [0xbcae02bdbc939960, 0x1608ce3b49886bca, 0x00000000000029db],
    [0x86968f48a4899878, 0x0000b3c4f1ba87bc, 0x0000000000000000],
    [0x7353aafa27e2667c, 0x000000000003041a, 0x0000000000000000],
];

#[rustfmt::skip]
pub static MIN_BLOCK_2: [u8; 68] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 2, 2, 3, 4, 4, 5, 5, 6,
    6, 7, 7, 8, 8, 9, 9, 10, 10, 11,
    12, 12, 13, 13, 14, 14, 15, 15, 16, 16,
    17, 17, 18, 18, 19, 20, 20, 21, 21, 22,
    22, 23, 23, 24, 24, 25, 25, 26, 27, 27,
    28, 28, 29, 29, 30, 30, 31, 31,
];

#[rustfmt::skip]
pub static POW10_OFFSET_2: [u16; 69] = [
    0, 2, 6, 12, 19, 28, 39, 52, 67, 83,
    101, 120, 141, 162, 185, 209, 234, 261, 288, 317,
    347, 379, 411, 445, 480, 517, 555, 594, 634, 676,
    719, 762, 807, 853, 901, 950, 1000, 1051, 1104, 1158,
    1213, 1269, 1327, 1386, 1447, 1508, 1570, 1634, 1699, 1765,
    1832, 1901, 1971, 2043, 2115, 2189, 2264, 2341, 2418, 2496,
    2576, 2657, 2740, 2823, 2908, 2994, 3082, 3170, 3260,
];

#[rustfmt::skip]
pub static POW10_SPLIT_2: [[u64; 3]; 3260] = [
    [0x0000000000000000, 0x0000000000000000, 0x00000000003b9aca],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x0000000000000000, 0x9aca000000000000, 0x000000000000003b],
    [0x0000000000000000, 0x6400000000000000, 0x0000000de0b6b3a7],
    [0x0000000000000000, 0x0000000000000000, 0x000000092bdd3ce8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x0000000000000000, 0x003b9aca00000000, 0x0000000000000000],
    [0x0000000000000000, 0xb3a7640000000000, 0x00000000000de0b6],
    [0x0000000000000000, 0x3ce8000000000000, 0x0000000cbc7ad080],
    [0x0000000000000000, 0x1000000000000000, 0x000000000e2e4b9f],
    [0x0000000000000000, 0x0000000000000000, 0x000000073b7822a0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x0000000000000000, 0x0000003b9aca0000, 0x0000000000000000],
    [0x0000000000000000, 0xe0b6b3a764000000, 0x000000000000000d],
    [0x0000000000000000, 0xd0803ce800000000, 0x000000033b2e3c9f],
    [0x0000000000000000, 0x4b9f100000000000, 0x00000007684a15b3],
    [0x0000000000000000, 0x22a0000000000000, 0x0000000bf171a00b],
    [0x0000000000000000, 0x4000000000000000, 0x0000000297b67d92],
    [0x0000000000000000, 0x0000000000000000, 0x000000043fc8e680],
    [0x0000000000000000, 0x00000000003b9aca, 0x0000000000000000],
    [0x0000000000000000, 0x000de0b6b3a76400, 0x0000000000000000],
    [0x0000000000000000, 0x3c9fd0803ce80000, 0x0000000000033b2e],
    [0x0000000000000000, 0x15b34b9f10000000, 0x0000000ac3edc907],
    [0x0000000000000000, 0xa00b22a000000000, 0x00000001a648f768],
    [0x0000000000000000, 0x7d92400000000000, 0x000000185c2565f6],
    [0x0000000000000000, 0xe680000000000000, 0x0000001b9695bdcf],
    [0x0000000000000000, 0x0000000000000000, 0x000000129a6f34e1],
    [0x0000000000000000, 0x0000000000000000, 0x0000001695a68a00],
    [0x9aca000000000000, 0x000000000000003b, 0x0000000000000000],
    [0x6400000000000000, 0x0000000de0b6b3a7, 0x0000000000000000],
    [0x0000000000000000, 0x3b2e3c9fd0803ce8, 0x0000000000000003],
    [0x0000000000000000, 0xc90715b34b9f1000, 0x00000000c097ce7b],
    [0x0000000000000000, 0xf768a00b22a00000, 0x0000001cd22d3ce2],
    [0x0000000000000000, 0x65f67d9240000000, 0x000000170adc090b],
    [0x0000000000000000, 0xbdcfe68000000000, 0x00000002a76423ac],
    [0x0000000000000000, 0x34e1000000000000, 0x0000000a6acc66f6],
    [0x0000000000000000, 0x8a00000000000000, 0x0000001b85a8f013],
    [0x0000000000000000, 0x0000000000000000, 0x000000048c9e6ee4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x003b9aca00000000, 0x0000000000000000, 0x0000000000000000],
    [0xb3a7640000000000, 0x00000000000de0b6, 0x0000000000000000],
    [0x3ce8000000000000, 0x00033b2e3c9fd080, 0x0000000000000000],
    [0x1000000000000000, 0xce7bc90715b34b9f, 0x000000000000c097],
    [0x0000000000000000, 0x3ce2f768a00b22a0, 0x000000058afb86b9],
    [0x0000000000000000, 0x090b65f67d924000, 0x0000000d53a41999],
    [0x0000000000000000, 0x23acbdcfe6800000, 0x00000005d438d27e],
    [0x0000000000000000, 0x66f634e100000000, 0x0000001d5e7dcdcf],
    [0x0000000000000000, 0xf0138a0000000000, 0x000000127cbd5589],
    [0x0000000000000000, 0x6ee4000000000000, 0x000000025056c3fe],
    [0x0000000000000000, 0xe800000000000000, 0x0000001d700104a7],
    [0x0000000000000000, 0x0000000000000000, 0x000000094a990d10],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x0000003b9aca0000, 0x0000000000000000, 0x0000000000000000],
    [0xe0b6b3a764000000, 0x000000000000000d, 0x0000000000000000],
    [0xd0803ce800000000, 0x000000033b2e3c9f, 0x0000000000000000],
    [0x4b9f100000000000, 0xc097ce7bc90715b3, 0x0000000000000000],
    [0x22a0000000000000, 0x86b93ce2f768a00b, 0x000000002cd76fe0],
    [0x4000000000000000, 0x1999090b65f67d92, 0x000000167969e6c5],
    [0x0000000000000000, 0xd27e23acbdcfe680, 0x0000001016ae3157],
    [0x0000000000000000, 0xcdcf66f634e10000, 0x00000014729cfe31],
    [0x0000000000000000, 0x5589f0138a000000, 0x0000000b988be7e4],
    [0x0000000000000000, 0xc3fe6ee400000000, 0x000000175c616acd],
    [0x0000000000000000, 0x04a7e80000000000, 0x000000121b30e744],
    [0x0000000000000000, 0x0d10000000000000, 0x0000000fd6332b26],
    [0x0000000000000000, 0xa000000000000000, 0x00000008dc0491ee],
    [0x0000000000000000, 0x0000000000000000, 0x00000019c1c38a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x00000000003b9aca, 0x0000000000000000, 0x0000000000000000],
    [0x000de0b6b3a76400, 0x0000000000000000, 0x0000000000000000],
    [0x3c9fd0803ce80000, 0x0000000000033b2e, 0x0000000000000000],
    [0x15b34b9f10000000, 0x0000c097ce7bc907, 0x0000000000000000],
    [0xa00b22a000000000, 0x6fe086b93ce2f768, 0x0000000000002cd7],
    [0x7d92400000000000, 0xe6c51999090b65f6, 0x000000145ba70a64],
    [0xe680000000000000, 0x3157d27e23acbdcf, 0x000000177e31dd8f],
    [0x0000000000000000, 0xfe31cdcf66f634e1, 0x00000003898ee946],
    [0x0000000000000000, 0xe7e45589f0138a00, 0x00000010878268f7],
    [0x0000000000000000, 0x6acdc3fe6ee40000, 0x0000001beaf1bc0c],
    [0x0000000000000000, 0xe74404a7e8000000, 0x00000002e41f7839],
    [0x0000000000000000, 0x2b260d1000000000, 0x0000000d7b4f7c79],
    [0x0000000000000000, 0x91eea00000000000, 0x0000001c363555f2],
    [0x0000000000000000, 0x8a40000000000000, 0x0000001aace82f92],
    [0x0000000000000000, 0x8000000000000000, 0x0000000451128b96],
    [0x0000000000000000, 0x0000000000000000, 0x000000053d1ac100],
    [0x000000000000003c, 0x0000000000000000, 0x0000000000000000],
    [0x0000000de0b6b3a8, 0x0000000000000000, 0x0000000000000000],
    [0x3b2e3c9fd0803ce8, 0x0000000000000003, 0x0000000000000000],
    [0xc90715b34b9f1000, 0x00000000c097ce7b, 0x0000000000000000],
    [0xf768a00b22a00000, 0x2cd76fe086b93ce2, 0x0000000000000000],
    [0x65f67d9240000000, 0x0a64e6c51999090b, 0x000000000a70c3c4],
    [0xbdcfe68000000000, 0xdd8f3157d27e23ac, 0x0000000fd7893215],
    [0x34e1000000000000, 0xe946fe31cdcf66f6, 0x0000000517488955],
    [0x8a00000000000000, 0x68f7e7e45589f013, 0x0000001400b57b5c],
    [0x0000000000000000, 0xbc0c6acdc3fe6ee4, 0x0000001584113266],
    [0x0000000000000000, 0x7839e74404a7e800, 0x00000017eb750c77],
    [0x0000000000000000, 0x7c792b260d100000, 0x0000001bd0f1efff],
    [0x0000000000000000, 0x55f291eea0000000, 0x0000001daec5660d],
    [0x0000000000000000, 0x2f928a4000000000, 0x000000031adf215f],
    [0x0000000000000000, 0x8b96800000000000, 0x0000001629847f8d],
    [0x0000000000000000, 0xc100000000000000, 0x00000003275c582d],
    [0x0000000000000000, 0x0000000000000000, 0x0000000aa725344a],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x00000000000de0b7, 0x0000000000000000, 0x0000000000000000],
    [0x00033b2e3c9fd081, 0x0000000000000000, 0x0000000000000000],
    [0xce7bc90715b34ba0, 0x000000000000c097, 0x0000000000000000],
    [0x3ce2f768a00b22a0, 0x00002cd76fe086b9, 0x0000000000000000],
    [0x090b65f67d924000, 0xc3c40a64e6c51999, 0x0000000000000a70],
    [0x23acbdcfe6800000, 0x3215dd8f3157d27e, 0x0000001a414ceccc],
    [0x66f634e100000000, 0x8955e946fe31cdcf, 0x00000011bd9d4abc],
    [0xf0138a0000000000, 0x7b5c68f7e7e45589, 0x0000000e18412ecf],
    [0x6ee4000000000000, 0x3266bc0c6acdc3fe, 0x00000012817d391f],
    [0xe800000000000000, 0x0c777839e74404a7, 0x00000007437a9ce9],
    [0x0000000000000000, 0xefff7c792b260d10, 0x000000187563ec69],
    [0x0000000000000000, 0x660d55f291eea000, 0x00000018aa5dd8c0],
    [0x0000000000000000, 0x215f2f928a400000, 0x0000000efe75475b],
    [0x0000000000000000, 0x7f8d8b9680000000, 0x0000001537caeb8e],
    [0x0000000000000000, 0x582dc10000000000, 0x000000036029caf7],
    [0x0000000000000000, 0x344a000000000000, 0x0000001bc97bc295],
    [0x0000000000000000, 0x6400000000000000, 0x00000004efdf3dc6],
    [0x0000000000000000, 0x0000000000000000, 0x00000010639bb2e8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x000000000000000e, 0x0000000000000000, 0x0000000000000000],
    [0x000000033b2e3ca0, 0x0000000000000000, 0x0000000000000000],
    [0xc097ce7bc90715b4, 0x0000000000000000, 0x0000000000000000],
    [0x86b93ce2f768a00c, 0x000000002cd76fe0, 0x0000000000000000],
    [0x1999090b65f67d93, 0x0a70c3c40a64e6c5, 0x0000000000000000],
    [0xd27e23acbdcfe680, 0xeccc3215dd8f3157, 0x00000000026e4d30],
    [0xcdcf66f634e10000, 0x4abc8955e946fe31, 0x0000000b64281d3a],
    [0x5589f0138a000000, 0x2ecf7b5c68f7e7e4, 0x0000000d9278680a],
    [0xc3fe6ee400000000, 0x391f3266bc0c6acd, 0x000000025ef2032e],
    [0x04a7e80000000000, 0x9ce90c777839e744, 0x0000000ac31d0674],
    [0x0d10000000000000, 0xec69efff7c792b26, 0x0000001b26ac1de0],
    [0xa000000000000000, 0xd8c0660d55f291ee, 0x0000001691171c95],
    [0x0000000000000000, 0x475b215f2f928a40, 0x000000051629f84a],
    [0x0000000000000000, 0xeb8e7f8d8b968000, 0x000000114b5b89d0],
    [0x0000000000000000, 0xcaf7582dc1000000, 0x00000012d73764fc],
    [0x0000000000000000, 0xc295344a00000000, 0x0000001d0e3b9244],
    [0x0000000000000000, 0x3dc6640000000000, 0x00000010026bb258],
    [0x0000000000000000, 0xb2e8000000000000, 0x000000148b978322],
    [0x0000000000000000, 0x1000000000000000, 0x00000008143678bb],
    [0x0000000000000000, 0x0000000000000000, 0x0000000dc0663aa0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x0000000000033b2f, 0x0000000000000000, 0x0000000000000000],
    [0x0000c097ce7bc908, 0x0000000000000000, 0x0000000000000000],
    [0x6fe086b93ce2f769, 0x0000000000002cd7, 0x0000000000000000],
    [0xe6c51999090b65f7, 0x00000a70c3c40a64, 0x0000000000000000],
    [0x3157d27e23acbdd0, 0x4d30eccc3215dd8f, 0x000000000000026e],
    [0xfe31cdcf66f634e1, 0x1d3a4abc8955e946, 0x00000019ae7bbeea],
    [0xe7e45589f0138a00, 0x680a2ecf7b5c68f7, 0x00000018b4e5bf5a],
    [0x6acdc3fe6ee40000, 0x032e391f3266bc0c, 0x000000150ca44502],
    [0xe74404a7e8000000, 0x06749ce90c777839, 0x0000000077f3277b],
    [0x2b260d1000000000, 0x1de0ec69efff7c79, 0x0000001ca4dfd568],
    [0x91eea00000000000, 0x1c95d8c0660d55f2, 0x000000183dd6f75e],
    [0x8a40000000000000, 0xf84a475b215f2f92, 0x00000015e97dfda6],
    [0x8000000000000000, 0x89d0eb8e7f8d8b96, 0x0000000912c93b0b],
    [0x0000000000000000, 0x64fccaf7582dc100, 0x00000002afbd28b6],
    [0x0000000000000000, 0x9244c295344a0000, 0x0000000caa29ee88],
    [0x0000000000000000, 0xb2583dc664000000, 0x00000001fee4999f],
    [0x0000000000000000, 0x8322b2e800000000, 0x000000076144a20b],
    [0x0000000000000000, 0x78bb100000000000, 0x00000002ae2ef794],
    [0x0000000000000000, 0x3aa0000000000000, 0x00000004c433e47b],
    [0x0000000000000000, 0x4000000000000000, 0x0000001cb1056082],
    [0x0000000000000000, 0x0000000000000000, 0x00000000861c4680],
    [0x0000000000000004, 0x0000000000000000, 0x0000000000000000],
    [0x00000000c097ce7c, 0x0000000000000000, 0x0000000000000000],
    [0x2cd76fe086b93ce3, 0x0000000000000000, 0x0000000000000000],
    [0x0a64e6c51999090c, 0x000000000a70c3c4, 0x0000000000000000],
    [0xdd8f3157d27e23ad, 0x026e4d30eccc3215, 0x0000000000000000],
    [0xe946fe31cdcf66f7, 0xbeea1d3a4abc8955, 0x000000000090e40f],
    [0x68f7e7e45589f014, 0xbf5a680a2ecf7b5c, 0x00000003aa853a36],
    [0xbc0c6acdc3fe6ee4, 0x4502032e391f3266, 0x0000000cbf34255a],
    [0x7839e74404a7e800, 0x277b06749ce90c77, 0x00000015047c3465],
    [0x7c792b260d100000, 0xd5681de0ec69efff, 0x000000178d42eba5],
    [0x55f291eea0000000, 0xf75e1c95d8c0660d, 0x00000008cf0f39e8],
    [0x2f928a4000000000, 0xfda6f84a475b215f, 0x00000018707a5263],
    [0x8b96800000000000, 0x3b0b89d0eb8e7f8d, 0x0000001747eaf7d0],
    [0xc100000000000000, 0x28b664fccaf7582d, 0x00000012ae1e7c4b],
    [0x0000000000000000, 0xee889244c295344a, 0x000000117fd3d51e],
    [0x0000000000000000, 0x999fb2583dc66400, 0x0000000733ad6015],
    [0x0000000000000000, 0xa20b8322b2e80000, 0x0000000507774363],
    [0x0000000000000000, 0xf79478bb10000000, 0x000000173296c002],
    [0x0000000000000000, 0xe47b3aa000000000, 0x00000000b0da7e7e],
    [0x0000000000000000, 0x6082400000000000, 0x0000001d8b61f8ed],
    [0x0000000000000000, 0x4680000000000000, 0x0000001977606141],
    [0x0000000000000000, 0x0000000000000000, 0x0000000f32b76aa1],
    [0x0000000000000000, 0x0000000000000000, 0x00000007aef40a00],
    [0x000000000000c098, 0x0000000000000000, 0x0000000000000000],
    [0x00002cd76fe086ba, 0x0000000000000000, 0x0000000000000000],
    [0xc3c40a64e6c5199a, 0x0000000000000a70, 0x0000000000000000],
    [0x3215dd8f3157d27f, 0x0000026e4d30eccc, 0x0000000000000000],
    [0x8955e946fe31cdd0, 0xe40fbeea1d3a4abc, 0x0000000000000090],
    [0x7b5c68f7e7e4558a, 0x3a36bf5a680a2ecf, 0x00000003eec6266d],
    [0x3266bc0c6acdc3ff, 0x255a4502032e391f, 0x000000196e75d2f8],
    [0x0c777839e74404a8, 0x3465277b06749ce9, 0x0000001bf94113ae],
    [0xefff7c792b260d10, 0xeba5d5681de0ec69, 0x0000000ac2034a4a],
    [0x660d55f291eea000, 0x39e8f75e1c95d8c0, 0x00000011719c17e2],
    [0x215f2f928a400000, 0x5263fda6f84a475b, 0x00000016debd08d9],
    [0x7f8d8b9680000000, 0xf7d03b0b89d0eb8e, 0x00000014cbff169e],
    [0x582dc10000000000, 0x7c4b28b664fccaf7, 0x0000000735d68069],
    [0x344a000000000000, 0xd51eee889244c295, 0x000000188f6d53ab],
    [0x6400000000000000, 0x6015999fb2583dc6, 0x0000000a349eebbf],
    [0x0000000000000000, 0x4363a20b8322b2e8, 0x0000000ec176c937],
    [0x0000000000000000, 0xc002f79478bb1000, 0x0000000cddf21b74],
    [0x0000000000000000, 0x7e7ee47b3aa00000, 0x0000001b2ed8505a],
    [0x0000000000000000, 0xf8ed608240000000, 0x0000001511debecd],
    [0x0000000000000000, 0x6141468000000000, 0x000000122783fa75],
    [0x0000000000000000, 0x6aa1000000000000, 0x0000001b54632b41],
    [0x0000000000000000, 0x0a00000000000000, 0x0000000f3b20ddfd],
    [0x0000000000000000, 0x0000000000000000, 0x0000001d1ce8ade4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x000000002cd76fe1, 0x0000000000000000, 0x0000000000000000],
    [0x0a70c3c40a64e6c6, 0x0000000000000000, 0x0000000000000000],
    [0xeccc3215dd8f3158, 0x00000000026e4d30, 0x0000000000000000],
    [0x4abc8955e946fe32, 0x0090e40fbeea1d3a, 0x0000000000000000],
    [0x2ecf7b5c68f7e7e5, 0x266d3a36bf5a680a, 0x000000000021bc2b],
    [0x391f3266bc0c6ace, 0xd2f8255a4502032e, 0x0000000a0bf25671],
    [0x9ce90c777839e745, 0x13ae3465277b0674, 0x0000001a8071ea5a],
    [0xec69efff7c792b27, 0x4a4aeba5d5681de0, 0x00000014f9001066],
    [0xd8c0660d55f291ef, 0x17e239e8f75e1c95, 0x00000017d0f8ac00],
    [0x475b215f2f928a40, 0x08d95263fda6f84a, 0x00000000058f9448],
    [0xeb8e7f8d8b968000, 0x169ef7d03b0b89d0, 0x00000010c5983fb4],
    [0xcaf7582dc1000000, 0x80697c4b28b664fc, 0x0000000c20b55897],
    [0xc295344a00000000, 0x53abd51eee889244, 0x0000000578ce1a6d],
    [0x3dc6640000000000, 0xebbf6015999fb258, 0x0000001974633381],
    [0xb2e8000000000000, 0xc9374363a20b8322, 0x00000000727e7049],
    [0x1000000000000000, 0x1b74c002f79478bb, 0x000000112dfd008c],
    [0x0000000000000000, 0x505a7e7ee47b3aa0, 0x00000002d1a5fa26],
    [0x0000000000000000, 0xbecdf8ed60824000, 0x00000008ebaf6cfe],
    [0x0000000000000000, 0xfa75614146800000, 0x0000001d829c42d4],
    [0x0000000000000000, 0x2b416aa100000000, 0x00000013c91ac5a7],
    [0x0000000000000000, 0xddfd0a0000000000, 0x000000091ea7010e],
    [0x0000000000000000, 0xade4000000000000, 0x00000003762696af],
    [0x0000000000000000, 0xe800000000000000, 0x0000000b19e7c65d],
    [0x0000000000000000, 0x0000000000000000, 0x00000015dd3fa910],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x0000000000002cd8, 0x0000000000000000, 0x0000000000000000],
    [0x00000a70c3c40a65, 0x0000000000000000, 0x0000000000000000],
    [0x4d30eccc3215dd90, 0x000000000000026e, 0x0000000000000000],
    [0x1d3a4abc8955e947, 0x00000090e40fbeea, 0x0000000000000000],
    [0x680a2ecf7b5c68f8, 0xbc2b266d3a36bf5a, 0x0000000000000021],
    [0x032e391f3266bc0d, 0x5671d2f8255a4502, 0x00000007dac3c24a],
    [0x06749ce90c77783a, 0xea5a13ae3465277b, 0x000000114edee44d],
    [0x1de0ec69efff7c7a, 0x10664a4aeba5d568, 0x00000012241f37a4],
    [0x1c95d8c0660d55f3, 0xac0017e239e8f75e, 0x000000086595e598],
    [0xf84a475b215f2f93, 0x944808d95263fda6, 0x00000005be8ef547],
    [0x89d0eb8e7f8d8b97, 0x3fb4169ef7d03b0b, 0x00000010aa744860],
    [0x64fccaf7582dc100, 0x589780697c4b28b6, 0x0000001668e0c5d0],
    [0x9244c295344a0000, 0x1a6d53abd51eee88, 0x00000012b4ff9ba3],
    [0xb2583dc664000000, 0x3381ebbf6015999f, 0x000000082c50cae7],
    [0x8322b2e800000000, 0x7049c9374363a20b, 0x0000001807455c21],
    [0x78bb100000000000, 0x008c1b74c002f794, 0x00000007c918f05d],
    [0x3aa0000000000000, 0xfa26505a7e7ee47b, 0x00000015a75c010a],
    [0x4000000000000000, 0x6cfebecdf8ed6082, 0x000000028e49f8f3],
    [0x0000000000000000, 0x42d4fa7561414680, 0x0000001adfe95b39],
    [0x0000000000000000, 0xc5a72b416aa10000, 0x0000000d55067893],
    [0x0000000000000000, 0x010eddfd0a000000, 0x000000049a82077e],
    [0x0000000000000000, 0x96afade400000000, 0x0000001d566e7cf0],
    [0x0000000000000000, 0xc65de80000000000, 0x0000001a36cdf9a8],
    [0x0000000000000000, 0xa910000000000000, 0x000000097e5f257b],
    [0x0000000000000000, 0xa000000000000000, 0x0000001ccabbf706],
    [0x0000000000000000, 0x0000000000000000, 0x000000018ae17a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x000000000a70c3c5, 0x0000000000000000, 0x0000000000000000],
    [0x026e4d30eccc3216, 0x0000000000000000, 0x0000000000000000],
    [0xbeea1d3a4abc8956, 0x000000000090e40f, 0x0000000000000000],
    [0xbf5a680a2ecf7b5d, 0x0021bc2b266d3a36, 0x0000000000000000],
    [0x4502032e391f3267, 0xc24a5671d2f8255a, 0x000000000007dac3],
    [0x277b06749ce90c78, 0xe44dea5a13ae3465, 0x0000000fc6bf79f2],
    [0xd5681de0ec69f000, 0x37a410664a4aeba5, 0x0000001ac015f407],
    [0xf75e1c95d8c0660e, 0xe598ac0017e239e8, 0x00000001ae2ffa60],
    [0xfda6f84a475b2160, 0xf547944808d95263, 0x000000168f80c2a5],
    [0x3b0b89d0eb8e7f8e, 0x48603fb4169ef7d0, 0x00000008d67affc6],
    [0x28b664fccaf7582e, 0xc5d0589780697c4b, 0x000000105d2d2db0],
    [0xee889244c295344a, 0x9ba31a6d53abd51e, 0x0000000b5b147fd6],
    [0x999fb2583dc66400, 0xcae73381ebbf6015, 0x000000142a3c8e03],
    [0xa20b8322b2e80000, 0x5c217049c9374363, 0x00000000e20e560e],
    [0xf79478bb10000000, 0xf05d008c1b74c002, 0x0000000357ea75b0],
    [0xe47b3aa000000000, 0x010afa26505a7e7e, 0x0000000b64fca4bc],
    [0x6082400000000000, 0xf8f36cfebecdf8ed, 0x0000000df8858113],
    [0x4680000000000000, 0x5b3942d4fa756141, 0x00000004a6739efe],
    [0x0000000000000000, 0x7893c5a72b416aa1, 0x0000001d6b6cc6d4],
    [0x0000000000000000, 0x077e010eddfd0a00, 0x00000013aadd3e97],
    [0x0000000000000000, 0x7cf096afade40000, 0x000000055ca6b7f4],
    [0x0000000000000000, 0xf9a8c65de8000000, 0x0000001b1f3a860a],
    [0x0000000000000000, 0x257ba91000000000, 0x000000028e2cbe3e],
    [0x0000000000000000, 0xf706a00000000000, 0x0000000e783715ed],
    [0x0000000000000000, 0x7a40000000000000, 0x000000199a6be5c7],
    [0x0000000000000000, 0x8000000000000000, 0x00000010a464b0f6],
    [0x0000000000000000, 0x0000000000000000, 0x0000001b97268100],
    [0x0000000000000a71, 0x0000000000000000, 0x0000000000000000],
    [0x0000026e4d30eccd, 0x0000000000000000, 0x0000000000000000],
    [0xe40fbeea1d3a4abd, 0x0000000000000090, 0x0000000000000000],
    [0x3a36bf5a680a2ed0, 0x00000021bc2b266d, 0x0000000000000000],
    [0x255a4502032e3920, 0xdac3c24a5671d2f8, 0x0000000000000007],
    [0x3465277b06749cea, 0x79f2e44dea5a13ae, 0x00000001d42aea28],
    [0xeba5d5681de0ec6a, 0xf40737a410664a4a, 0x000000096c9446f4],
    [0x39e8f75e1c95d8c1, 0xfa60e598ac0017e2, 0x0000001b3af4beb7],
    [0x5263fda6f84a475c, 0xc2a5f547944808d9, 0x0000000d088d1ec4],
    [0xf7d03b0b89d0eb8f, 0xffc648603fb4169e, 0x00000010026f98f3],
    [0x7c4b28b664fccaf8, 0x2db0c5d058978069, 0x0000001b021617c8],
    [0xd51eee889244c296, 0x7fd69ba31a6d53ab, 0x00000010ce2c2dfb],
    [0x6015999fb2583dc7, 0x8e03cae73381ebbf, 0x0000001cc122cfd7],
    [0x4363a20b8322b2e8, 0x560e5c217049c937, 0x0000001462ab641a],
    [0xc002f79478bb1000, 0x75b0f05d008c1b74, 0x0000000621c1dbc6],
    [0x7e7ee47b3aa00000, 0xa4bc010afa26505a, 0x0000001067ba2cb3],
    [0xf8ed608240000000, 0x8113f8f36cfebecd, 0x0000000c06312d52],
    [0x6141468000000000, 0x9efe5b3942d4fa75, 0x0000001335a25a3d],
    [0x6aa1000000000000, 0xc6d47893c5a72b41, 0x0000000e58e6e37d],
    [0x0a00000000000000, 0x3e97077e010eddfd, 0x0000001d48dfd27e],
    [0x0000000000000000, 0xb7f47cf096afade4, 0x0000001d64c212f7],
    [0x0000000000000000, 0x860af9a8c65de800, 0x0000001bdfc87905],
    [0x0000000000000000, 0xbe3e257ba9100000, 0x00000001493b85e8],
    [0x0000000000000000, 0x15edf706a0000000, 0x00000018632d6a23],
    [0x0000000000000000, 0xe5c77a4000000000, 0x000000082b44b862],
    [0x0000000000000000, 0xb0f6800000000000, 0x0000001706c13c7b],
    [0x0000000000000000, 0x8100000000000000, 0x0000001ccc92dd6b],
    [0x0000000000000000, 0x0000000000000000, 0x0000001907bb6dca],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x00000000026e4d31, 0x0000000000000000, 0x0000000000000000],
    [0x0090e40fbeea1d3b, 0x0000000000000000, 0x0000000000000000],
    [0x266d3a36bf5a680b, 0x000000000021bc2b, 0x0000000000000000],
    [0xd2f8255a4502032f, 0x0007dac3c24a5671, 0x0000000000000000],
    [0x13ae3465277b0675, 0xea2879f2e44dea5a, 0x000000000001d42a],
    [0x4a4aeba5d5681de1, 0x46f4f40737a41066, 0x00000009fdea0d38],
    [0x17e239e8f75e1c96, 0xbeb7fa60e598ac00, 0x0000000d1a618b95],
    [0x08d95263fda6f84b, 0x1ec4c2a5f5479448, 0x00000005101a49de],
    [0x169ef7d03b0b89d1, 0x98f3ffc648603fb4, 0x00000015ea001f80],
    [0x80697c4b28b664fd, 0x17c82db0c5d05897, 0x00000000239cb76b],
    [0x53abd51eee889245, 0x2dfb7fd69ba31a6d, 0x00000018ef3bf1b7],
    [0xebbf6015999fb259, 0xcfd78e03cae73381, 0x0000000cd8f62a09],
    [0xc9374363a20b8323, 0x641a560e5c217049, 0x0000000248d57366],
    [0x1b74c002f79478bc, 0xdbc675b0f05d008c, 0x00000017d6fb14a9],
    [0x505a7e7ee47b3aa0, 0x2cb3a4bc010afa26, 0x00000009bef5f9ed],
    [0xbecdf8ed60824000, 0x2d528113f8f36cfe, 0x000000196b50704e],
    [0xfa75614146800000, 0x5a3d9efe5b3942d4, 0x0000001233b6f724],
    [0x2b416aa100000000, 0xe37dc6d47893c5a7, 0x0000000876c72bea],
    [0xddfd0a0000000000, 0xd27e3e97077e010e, 0x00000018e30f2dfd],
    [0xade4000000000000, 0x12f7b7f47cf096af, 0x0000001d4b970076],
    [0xe800000000000000, 0x7905860af9a8c65d, 0x0000001b7dc3ab61],
    [0x0000000000000000, 0x85e8be3e257ba910, 0x00000016b1d3fcb5],
    [0x0000000000000000, 0x6a2315edf706a000, 0x0000000c76396d84],
    [0x0000000000000000, 0xb862e5c77a400000, 0x0000000107216ae8],
    [0x0000000000000000, 0x3c7bb0f680000000, 0x0000001861d057f1],
    [0x0000000000000000, 0xdd6b810000000000, 0x0000001a5d683dea],
    [0x0000000000000000, 0x6dca000000000000, 0x00000018e1a54c1d],
    [0x0000000000000000, 0x6400000000000000, 0x00000006da18d225],
    [0x0000000000000000, 0x0000000000000000, 0x00000008b4a7a8e8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x000000000000026f, 0x0000000000000000, 0x0000000000000000],
    [0x00000090e40fbeeb, 0x0000000000000000, 0x0000000000000000],
    [0xbc2b266d3a36bf5b, 0x0000000000000021, 0x0000000000000000],
    [0x5671d2f8255a4503, 0x00000007dac3c24a, 0x0000000000000000],
    [0xea5a13ae3465277c, 0xd42aea2879f2e44d, 0x0000000000000001],
    [0x10664a4aeba5d569, 0x0d3846f4f40737a4, 0x000000006d00f732],
    [0xac0017e239e8f75f, 0x8b95beb7fa60e598, 0x0000000ba74f6aa3],
    [0x944808d95263fda7, 0x49de1ec4c2a5f547, 0x0000000846a9872d],
    [0x3fb4169ef7d03b0c, 0x1f8098f3ffc64860, 0x0000000a8b685cff],
    [0x589780697c4b28b7, 0xb76b17c82db0c5d0, 0x0000001d991fe577],
    [0x1a6d53abd51eee89, 0xf1b72dfb7fd69ba3, 0x0000001bdfa87ba1],
    [0x3381ebbf601599a0, 0x2a09cfd78e03cae7, 0x00000007e73b6885],
    [0x7049c9374363a20c, 0x7366641a560e5c21, 0x0000000133cf9ff9],
    [0x008c1b74c002f795, 0x14a9dbc675b0f05d, 0x0000001c4707d9b9],
    [0xfa26505a7e7ee47c, 0xf9ed2cb3a4bc010a, 0x0000000d4a469e22],
    [0x6cfebecdf8ed6083, 0x704e2d528113f8f3, 0x0000000824bf9b2f],
    [0x42d4fa7561414680, 0xf7245a3d9efe5b39, 0x0000000b0b910216],
    [0xc5a72b416aa10000, 0x2beae37dc6d47893, 0x0000000558d82bad],
    [0x010eddfd0a000000, 0x2dfdd27e3e97077e, 0x0000000a846f3262],
    [0x96afade400000000, 0x007612f7b7f47cf0, 0x00000016dbf6a27e],
    [0xc65de80000000000, 0xab617905860af9a8, 0x0000001d564ae9c3],
    [0xa910000000000000, 0xfcb585e8be3e257b, 0x0000000fc169f4c1],
    [0xa000000000000000, 0x6d846a2315edf706, 0x0000000f5d23ec76],
    [0x0000000000000000, 0x6ae8b862e5c77a40, 0x0000001b92d8d888],
    [0x0000000000000000, 0x57f13c7bb0f68000, 0x00000001f5ba96d9],
    [0x0000000000000000, 0x3deadd6b81000000, 0x00000014cd49ff73],
    [0x0000000000000000, 0x4c1d6dca00000000, 0x0000001ad4f34f2c],
    [0x0000000000000000, 0xd225640000000000, 0x0000000a50538610],
    [0x0000000000000000, 0xa8e8000000000000, 0x00000003ea9a4e5b],
    [0x0000000000000000, 0x1000000000000000, 0x00000015575966d7],
    [0x0000000000000000, 0x0000000000000000, 0x00000014455452a0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x000000000090e410, 0x0000000000000000, 0x0000000000000000],
    [0x0021bc2b266d3a37, 0x0000000000000000, 0x0000000000000000],
    [0xc24a5671d2f8255b, 0x000000000007dac3, 0x0000000000000000],
    [0xe44dea5a13ae3466, 0x0001d42aea2879f2, 0x0000000000000000],
    [0x37a410664a4aeba6, 0xf7320d3846f4f407, 0x0000000000006d00],
    [0xe598ac0017e239e9, 0x6aa38b95beb7fa60, 0x00000000398e0035],
    [0xf547944808d95264, 0x872d49de1ec4c2a5, 0x0000000c6fdffdb2],
    [0x48603fb4169ef7d1, 0x5cff1f8098f3ffc6, 0x0000000bc3b49fee],
    [0xc5d0589780697c4c, 0xe577b76b17c82db0, 0x00000019b229d31c],
    [0x9ba31a6d53abd51f, 0x7ba1f1b72dfb7fd6, 0x00000006ba5b6e5a],
    [0xcae73381ebbf6016, 0x68852a09cfd78e03, 0x00000015113417ae],
    [0x5c217049c9374364, 0x9ff97366641a560e, 0x0000000ace262f44],
    [0xf05d008c1b74c003, 0xd9b914a9dbc675b0, 0x0000000ffa5cdfe2],
    [0x010afa26505a7e7f, 0x9e22f9ed2cb3a4bc, 0x0000001703f2a0e5],
    [0xf8f36cfebecdf8ee, 0x9b2f704e2d528113, 0x00000017a8e35f6b],
    [0x5b3942d4fa756142, 0x0216f7245a3d9efe, 0x000000190dd431df],
    [0x7893c5a72b416aa1, 0x2bad2beae37dc6d4, 0x000000161eed846c],
    [0x077e010eddfd0a00, 0x32622dfdd27e3e97, 0x000000192f7889c2],
    [0x7cf096afade40000, 0xa27e007612f7b7f4, 0x0000000f69a32b6a],
    [0xf9a8c65de8000000, 0xe9c3ab617905860a, 0x00000018d3ecee1e],
    [0x257ba91000000000, 0xf4c1fcb585e8be3e, 0x0000000732911ca8],
    [0xf706a00000000000, 0xec766d846a2315ed, 0x00000009892c4310],
    [0x7a40000000000000, 0xd8886ae8b862e5c7, 0x00000003f0bae510],
    [0x8000000000000000, 0x96d957f13c7bb0f6, 0x00000003ec16fd8f],
    [0x0000000000000000, 0xff733deadd6b8100, 0x00000003a131230a],
    [0x0000000000000000, 0x4f2c4c1d6dca0000, 0x000000028f85e829],
    [0x0000000000000000, 0x8610d22564000000, 0x000000099e396ea9],
    [0x0000000000000000, 0x4e5ba8e800000000, 0x00000009ab014a56],
    [0x0000000000000000, 0x66d7100000000000, 0x00000014183e5ce5],
    [0x0000000000000000, 0x52a0000000000000, 0x000000179c037135],
    [0x0000000000000000, 0x4000000000000000, 0x0000000c6a48a772],
    [0x0000000000000000, 0x0000000000000000, 0x0000001a99d4a680],
    [0x0000000000000091, 0x0000000000000000, 0x0000000000000000],
    [0x00000021bc2b266e, 0x0000000000000000, 0x0000000000000000],
    [0xdac3c24a5671d2f9, 0x0000000000000007, 0x0000000000000000],
    [0x79f2e44dea5a13af, 0x00000001d42aea28, 0x0000000000000000],
    [0xf40737a410664a4b, 0x6d00f7320d3846f4, 0x0000000000000000],
    [0xfa60e598ac0017e3, 0x00356aa38b95beb7, 0x0000000019612190],
    [0xc2a5f547944808da, 0xfdb2872d49de1ec4, 0x00000003b9b90fdf],
    [0xffc648603fb4169f, 0x9fee5cff1f8098f3, 0x00000016598280bb],
    [0x2db0c5d05897806a, 0xd31ce577b76b17c8, 0x0000000de1e93104],
    [0x7fd69ba31a6d53ac, 0x6e5a7ba1f1b72dfb, 0x000000011f9276d9],
    [0x8e03cae73381ebc0, 0x17ae68852a09cfd7, 0x00000014d281ce00],
    [0x560e5c217049c938, 0x2f449ff97366641a, 0x00000000058383b1],
    [0x75b0f05d008c1b75, 0xdfe2d9b914a9dbc6, 0x0000000b73a20f72],
    [0xa4bc010afa26505b, 0xa0e59e22f9ed2cb3, 0x0000001abf0e9b4d],
    [0x8113f8f36cfebece, 0x5f6b9b2f704e2d52, 0x000000121304f688],
    [0x9efe5b3942d4fa76, 0x31df0216f7245a3d, 0x00000001f30dceca],
    [0xc6d47893c5a72b42, 0x846c2bad2beae37d, 0x00000011465af0fc],
    [0x3e97077e010eddfe, 0x89c232622dfdd27e, 0x0000001cfdced7a0],
    [0xb7f47cf096afade4, 0x2b6aa27e007612f7, 0x00000007936c4d22],
    [0x860af9a8c65de800, 0xee1ee9c3ab617905, 0x00000007f4aaa7da],
    [0xbe3e257ba9100000, 0x1ca8f4c1fcb585e8, 0x000000152bdc1e5d],
    [0x15edf706a0000000, 0x4310ec766d846a23, 0x00000015ade7a6a9],
    [0xe5c77a4000000000, 0xe510d8886ae8b862, 0x000000099b67cd98],
    [0xb0f6800000000000, 0xfd8f96d957f13c7b, 0x00000005cbd852c8],
    [0x8100000000000000, 0x230aff733deadd6b, 0x00000010fe923838],
    [0x0000000000000000, 0xe8294f2c4c1d6dca, 0x0000000d1204e923],
    [0x0000000000000000, 0x6ea98610d2256400, 0x000000085c378349],
    [0x0000000000000000, 0x4a564e5ba8e80000, 0x0000001118e79532],
    [0x0000000000000000, 0x5ce566d710000000, 0x0000000bb58a4aa2],
    [0x0000000000000000, 0x713552a000000000, 0x00000008002fde00],
    [0x0000000000000000, 0xa772400000000000, 0x000000001a5bbd72],
    [0x0000000000000000, 0xa680000000000000, 0x0000001ab1ea879a],
    [0x0000000000000000, 0x0000000000000000, 0x00000006347cb061],
    [0x0000000000000000, 0x0000000000000000, 0x0000001695a68a00],
    [0x000000000021bc2c, 0x0000000000000000, 0x0000000000000000],
    [0x0007dac3c24a5672, 0x0000000000000000, 0x0000000000000000],
    [0xea2879f2e44dea5b, 0x000000000001d42a, 0x0000000000000000],
    [0x46f4f40737a41067, 0x00006d00f7320d38, 0x0000000000000000],
    [0xbeb7fa60e598ac01, 0x219000356aa38b95, 0x0000000000001961],
    [0x1ec4c2a5f5479449, 0x0fdffdb2872d49de, 0x000000169d770528],
    [0x98f3ffc648603fb5, 0x80bb9fee5cff1f80, 0x0000000953e1c8bd],
    [0x17c82db0c5d05898, 0x3104d31ce577b76b, 0x0000000e51db364e],
    [0x2dfb7fd69ba31a6e, 0x76d96e5a7ba1f1b7, 0x0000001234934c3c],
    [0xcfd78e03cae73382, 0xce0017ae68852a09, 0x0000000e13f35102],
    [0x641a560e5c21704a, 0x83b12f449ff97366, 0x00000000a72c280f],
    [0xdbc675b0f05d008d, 0x0f72dfe2d9b914a9, 0x000000039cbb4c65],
    [0x2cb3a4bc010afa27, 0x9b4da0e59e22f9ed, 0x0000001787aa82e4],
    [0x2d528113f8f36cff, 0xf6885f6b9b2f704e, 0x000000176c9fb352],
    [0x5a3d9efe5b3942d5, 0xceca31df0216f724, 0x0000001350fb328e],
    [0xe37dc6d47893c5a8, 0xf0fc846c2bad2bea, 0x00000003729cae4b],
    [0xd27e3e97077e010f, 0xd7a089c232622dfd, 0x00000011ae751693],
    [0x12f7b7f47cf096b0, 0x4d222b6aa27e0076, 0x000000049eb15e77],
    [0x7905860af9a8c65e, 0xa7daee1ee9c3ab61, 0x0000001bc6e9696c],
    [0x85e8be3e257ba910, 0x1e5d1ca8f4c1fcb5, 0x000000194c622b07],
    [0x6a2315edf706a000, 0xa6a94310ec766d84, 0x00000001a84d5793],
    [0xb862e5c77a400000, 0xcd98e510d8886ae8, 0x00000004934ac5c8],
    [0x3c7bb0f680000000, 0x52c8fd8f96d957f1, 0x00000010f3675cff],
    [0xdd6b810000000000, 0x3838230aff733dea, 0x0000001da51096ab],
    [0x6dca000000000000, 0xe923e8294f2c4c1d, 0x0000000a1016dc34],
    [0x6400000000000000, 0x83496ea98610d225, 0x0000000c51b94611],
    [0x0000000000000000, 0x95324a564e5ba8e8, 0x0000000413d8b845],
    [0x0000000000000000, 0x4aa25ce566d71000, 0x0000001033753f1c],
    [0x0000000000000000, 0xde00713552a00000, 0x00000006964ea3f8],
    [0x0000000000000000, 0xbd72a77240000000, 0x0000001c243f0587],
    [0x0000000000000000, 0x879aa68000000000, 0x00000001cd577f0c],
    [0x0000000000000000, 0xb061000000000000, 0x00000002ead41a67],
    [0x0000000000000000, 0x8a00000000000000, 0x0000001824584686],
    [0x0000000000000000, 0x0000000000000000, 0x0000000185c22ce4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x0000000000000022, 0x0000000000000000, 0x0000000000000000],
    [0x00000007dac3c24b, 0x0000000000000000, 0x0000000000000000],
    [0xd42aea2879f2e44e, 0x0000000000000001, 0x0000000000000000],
    [0x0d3846f4f40737a5, 0x000000006d00f732, 0x0000000000000000],
    [0x8b95beb7fa60e599, 0x1961219000356aa3, 0x0000000000000000],
    [0x49de1ec4c2a5f548, 0x05280fdffdb2872d, 0x0000000005e8bb31],
    [0x1f8098f3ffc64861, 0xc8bd80bb9fee5cff, 0x0000000b69d403d3],
    [0xb76b17c82db0c5d1, 0x364e3104d31ce577, 0x0000001381ec8b10],
    [0xf1b72dfb7fd69ba4, 0x4c3c76d96e5a7ba1, 0x00000003c6517b2f],
    [0x2a09cfd78e03cae8, 0x5102ce0017ae6885, 0x0000000b032b1deb],
    [0x7366641a560e5c22, 0x280f83b12f449ff9, 0x00000018fc8f0f16],
    [0x14a9dbc675b0f05e, 0x4c650f72dfe2d9b9, 0x0000000528a1284b],
    [0xf9ed2cb3a4bc010b, 0x82e49b4da0e59e22, 0x000000118822a9a2],
    [0x704e2d528113f8f4, 0xb352f6885f6b9b2f, 0x000000080908a898],
    [0xf7245a3d9efe5b3a, 0x328ececa31df0216, 0x00000005c0437c39],
    [0x2beae37dc6d47894, 0xae4bf0fc846c2bad, 0x0000000d513c7575],
    [0x2dfdd27e3e97077f, 0x1693d7a089c23262, 0x0000001b665335c1],
    [0x007612f7b7f47cf1, 0x5e774d222b6aa27e, 0x0000000f278f0372],
    [0xab617905860af9a9, 0x696ca7daee1ee9c3, 0x0000001aa0ec9115],
    [0xfcb585e8be3e257c, 0x2b071e5d1ca8f4c1, 0x00000004fc3e5b3c],
    [0x6d846a2315edf707, 0x5793a6a94310ec76, 0x0000000e024c003b],
    [0x6ae8b862e5c77a40, 0xc5c8cd98e510d888, 0x0000000dd1108955],
    [0x57f13c7bb0f68000, 0x5cff52c8fd8f96d9, 0x00000013f871f03e],
    [0x3deadd6b81000000, 0x96ab3838230aff73, 0x0000000e8523ff0d],
    [0x4c1d6dca00000000, 0xdc34e923e8294f2c, 0x0000000329f0d1d7],
    [0xd225640000000000, 0x461183496ea98610, 0x0000001474dffd51],
    [0xa8e8000000000000, 0xb84595324a564e5b, 0x00000012ec4a5114],
    [0x1000000000000000, 0x3f1c4aa25ce566d7, 0x00000004d2ff3ca5],
    [0x0000000000000000, 0xa3f8de00713552a0, 0x00000008ac10e004],
    [0x0000000000000000, 0x0587bd72a7724000, 0x000000011498a842],
    [0x0000000000000000, 0x7f0c879aa6800000, 0x0000000f5f31b4ae],
    [0x0000000000000000, 0x1a67b06100000000, 0x0000000ad365010a],
    [0x0000000000000000, 0x46868a0000000000, 0x000000025a31c0dc],
    [0x0000000000000000, 0x2ce4000000000000, 0x000000157c0c3e63],
    [0x0000000000000000, 0xe800000000000000, 0x00000017174fce93],
    [0x0000000000000000, 0x0000000000000000, 0x00000004a2814510],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x000000000007dac4, 0x0000000000000000, 0x0000000000000000],
    [0x0001d42aea2879f3, 0x0000000000000000, 0x0000000000000000],
    [0xf7320d3846f4f408, 0x0000000000006d00, 0x0000000000000000],
    [0x6aa38b95beb7fa61, 0x0000196121900035, 0x0000000000000000],
    [0x872d49de1ec4c2a6, 0xbb3105280fdffdb2, 0x00000000000005e8],
    [0x5cff1f8098f3ffc7, 0x03d3c8bd80bb9fee, 0x0000001862778b62],
    [0xe577b76b17c82db1, 0x8b10364e3104d31c, 0x00000016d22573af],
    [0x7ba1f1b72dfb7fd7, 0x7b2f4c3c76d96e5a, 0x0000000b11cbe7ff],
    [0x68852a09cfd78e04, 0x1deb5102ce0017ae, 0x0000001dae789839],
    [0x9ff97366641a560f, 0x0f16280f83b12f44, 0x0000000d4c6e4cd6],
    [0xd9b914a9dbc675b1, 0x284b4c650f72dfe2, 0x0000001409831677],
    [0x9e22f9ed2cb3a4bd, 0xa9a282e49b4da0e5, 0x0000001bbe559db2],
    [0x9b2f704e2d528114, 0xa898b352f6885f6b, 0x0000000bcbba79c7],
    [0x0216f7245a3d9eff, 0x7c39328ececa31df, 0x00000010af2f2838],
    [0x2bad2beae37dc6d5, 0x7575ae4bf0fc846c, 0x0000000d26c87b14],
    [0x32622dfdd27e3e98, 0x35c11693d7a089c2, 0x00000004c370eca5],
    [0xa27e007612f7b7f5, 0x03725e774d222b6a, 0x00000008a9e332c6],
    [0xe9c3ab617905860b, 0x9115696ca7daee1e, 0x000000104d20ad4a],
    [0xf4c1fcb585e8be3f, 0x5b3c2b071e5d1ca8, 0x000000115c860ca8],
    [0xec766d846a2315ee, 0x003b5793a6a94310, 0x00000009656d981a],
    [0xd8886ae8b862e5c8, 0x8955c5c8cd98e510, 0x000000060dc65510],
    [0x96d957f13c7bb0f7, 0xf03e5cff52c8fd8f, 0x00000003d9a66e8b],
    [0xff733deadd6b8100, 0xff0d96ab3838230a, 0x00000002c7965083],
    [0x4f2c4c1d6dca0000, 0xd1d7dc34e923e829, 0x00000000ee32b726],
    [0x8610d22564000000, 0xfd51461183496ea9, 0x0000000909d59d2e],
    [0x4e5ba8e800000000, 0x5114b84595324a56, 0x0000000af0cb31ec],
    [0x66d7100000000000, 0x3ca53f1c4aa25ce5, 0x00000019382e04e9],
    [0x52a0000000000000, 0xe004a3f8de007135, 0x00000018809b9acd],
    [0x4000000000000000, 0xa8420587bd72a772, 0x0000001221b74758],
    [0x0000000000000000, 0xb4ae7f0c879aa680, 0x00000014a46263c1],
    [0x0000000000000000, 0x010a1a67b0610000, 0x0000000f4c5ec0d2],
    [0x0000000000000000, 0xc0dc46868a000000, 0x0000001317d2a8fb],
    [0x0000000000000000, 0x3e632ce400000000, 0x0000001cd0466ef1],
    [0x0000000000000000, 0xce93e80000000000, 0x0000001a5dd9be3b],
    [0x0000000000000000, 0x4510000000000000, 0x0000000decc58c72],
    [0x0000000000000000, 0xa000000000000000, 0x0000001a9b02661e],
    [0x0000000000000000, 0x0000000000000000, 0x0000000721646a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x0000000000000008, 0x0000000000000000, 0x0000000000000000],
    [0x00000001d42aea29, 0x0000000000000000, 0x0000000000000000],
    [0x6d00f7320d3846f5, 0x0000000000000000, 0x0000000000000000],
    [0x00356aa38b95beb8, 0x0000000019612190, 0x0000000000000000],
    [0xfdb2872d49de1ec5, 0x05e8bb3105280fdf, 0x0000000000000000],
    [0x9fee5cff1f8098f4, 0x8b6203d3c8bd80bb, 0x00000000016035ce],
    [0xd31ce577b76b17c9, 0x73af8b10364e3104, 0x00000012499d69d3],
    [0x6e5a7ba1f1b72dfc, 0xe7ff7b2f4c3c76d9, 0x000000136e1ee5ee],
    [0x17ae68852a09cfd8, 0x98391deb5102ce00, 0x00000019d286f423],
    [0x2f449ff97366641b, 0x4cd60f16280f83b1, 0x00000008499ad25e],
    [0xdfe2d9b914a9dbc7, 0x1677284b4c650f72, 0x00000015f4b9f6e0],
    [0xa0e59e22f9ed2cb4, 0x9db2a9a282e49b4d, 0x000000165f46cbb1],
    [0x5f6b9b2f704e2d53, 0x79c7a898b352f688, 0x0000000b8d583101],
    [0x31df0216f7245a3e, 0x28387c39328ececa, 0x0000000057f5700e],
    [0x846c2bad2beae37e, 0x7b147575ae4bf0fc, 0x000000034bd46258],
    [0x89c232622dfdd27f, 0xeca535c11693d7a0, 0x0000001499dd927e],
    [0x2b6aa27e007612f8, 0x32c603725e774d22, 0x0000001d8d489580],
    [0xee1ee9c3ab617906, 0xad4a9115696ca7da, 0x000000000bd255f9],
    [0x1ca8f4c1fcb585e9, 0x0ca85b3c2b071e5d, 0x0000001c54827108],
    [0x4310ec766d846a24, 0x981a003b5793a6a9, 0x00000001dfc8c44a],
    [0xe510d8886ae8b863, 0x55108955c5c8cd98, 0x000000115e2859b6],
    [0xfd8f96d957f13c7c, 0x6e8bf03e5cff52c8, 0x0000000ca674dab8],
    [0x230aff733deadd6c, 0x5083ff0d96ab3838, 0x0000000d239947c7],
    [0xe8294f2c4c1d6dca, 0xb726d1d7dc34e923, 0x000000109aad20b7],
    [0x6ea98610d2256400, 0x9d2efd5146118349, 0x0000000cf8e6163b],
    [0x4a564e5ba8e80000, 0x31ec5114b8459532, 0x0000000de1456cad],
    [0x5ce566d710000000, 0x04e93ca53f1c4aa2, 0x0000000a85d5283d],
    [0x713552a000000000, 0x9acde004a3f8de00, 0x0000000e3506db28],
    [0xa772400000000000, 0x4758a8420587bd72, 0x00000009743a9ca0],
    [0xa680000000000000, 0x63c1b4ae7f0c879a, 0x0000000783f5d268],
    [0x0000000000000000, 0xc0d2010a1a67b061, 0x000000184e1c05e1],
    [0x0000000000000000, 0xa8fbc0dc46868a00, 0x00000016c28b86b7],
    [0x0000000000000000, 0x6ef13e632ce40000, 0x0000000cf599983b],
    [0x0000000000000000, 0xbe3bce93e8000000, 0x0000000dd6813c0a],
    [0x0000000000000000, 0x8c72451000000000, 0x000000028056b2b1],
    [0x0000000000000000, 0x661ea00000000000, 0x0000000b8953eb7a],
    [0x0000000000000000, 0x6a40000000000000, 0x0000001c7f8b11e0],
    [0x0000000000000000, 0x8000000000000000, 0x0000001672c8be56],
    [0x0000000000000000, 0x0000000000000000, 0x0000001423cd4100],
    [0x000000000001d42b, 0x0000000000000000, 0x0000000000000000],
    [0x00006d00f7320d39, 0x0000000000000000, 0x0000000000000000],
    [0x219000356aa38b96, 0x0000000000001961, 0x0000000000000000],
    [0x0fdffdb2872d49df, 0x000005e8bb310528, 0x0000000000000000],
    [0x80bb9fee5cff1f81, 0x35ce8b6203d3c8bd, 0x0000000000000160],
    [0x3104d31ce577b76c, 0x69d373af8b10364e, 0x000000166692e2d4],
    [0x76d96e5a7ba1f1b8, 0xe5eee7ff7b2f4c3c, 0x00000013a76e005d],
    [0xce0017ae68852a0a, 0xf42398391deb5102, 0x00000015dcc4789d],
    [0x83b12f449ff97367, 0xd25e4cd60f16280f, 0x00000006f960b422],
    [0x0f72dfe2d9b914aa, 0xf6e01677284b4c65, 0x000000081b89c26d],
    [0x9b4da0e59e22f9ee, 0xcbb19db2a9a282e4, 0x000000199a62ecc7],
    [0xf6885f6b9b2f704f, 0x310179c7a898b352, 0x00000010b75b1eeb],
    [0xceca31df0216f725, 0x700e28387c39328e, 0x00000018f51b669f],
    [0xf0fc846c2bad2beb, 0x62587b147575ae4b, 0x0000000751d57a34],
    [0xd7a089c232622dfe, 0x927eeca535c11693, 0x0000000c3256e331],
    [0x4d222b6aa27e0077, 0x958032c603725e77, 0x0000000b8abc7e7c],
    [0xa7daee1ee9c3ab62, 0x55f9ad4a9115696c, 0x0000001d01c8c8c9],
    [0x1e5d1ca8f4c1fcb6, 0x71080ca85b3c2b07, 0x00000011132820f9],
    [0xa6a94310ec766d85, 0xc44a981a003b5793, 0x0000001c467aacf2],
    [0xcd98e510d8886ae9, 0x59b655108955c5c8, 0x0000001ab8a1d4d0],
    [0x52c8fd8f96d957f2, 0xdab86e8bf03e5cff, 0x00000012b5426413],
    [0x3838230aff733deb, 0x47c75083ff0d96ab, 0x000000049f69bf02],
    [0xe923e8294f2c4c1e, 0x20b7b726d1d7dc34, 0x0000000087ebea18],
    [0x83496ea98610d226, 0x163b9d2efd514611, 0x000000059e210f8b],
    [0x95324a564e5ba8e8, 0x6cad31ec5114b845, 0x0000000294d3dca1],
    [0x4aa25ce566d71000, 0x283d04e93ca53f1c, 0x00000007c841aa72],
    [0xde00713552a00000, 0xdb289acde004a3f8, 0x0000001a944c5896],
    [0xbd72a77240000000, 0x9ca04758a8420587, 0x0000000552543b08],
    [0x879aa68000000000, 0xd26863c1b4ae7f0c, 0x00000002014df472],
    [0xb061000000000000, 0x05e1c0d2010a1a67, 0x0000001abbeb3bd0],
    [0x8a00000000000000, 0x86b7a8fbc0dc4686, 0x00000012a1bdb5e2],
    [0x0000000000000000, 0x983b6ef13e632ce4, 0x00000016f09f1cba],
    [0x0000000000000000, 0x3c0abe3bce93e800, 0x0000000da4838271],
    [0x0000000000000000, 0xb2b18c7245100000, 0x0000001a5d4df1ae],
    [0x0000000000000000, 0xeb7a661ea0000000, 0x0000000adf6b432c],
    [0x0000000000000000, 0x11e06a4000000000, 0x0000000a756e4ef9],
    [0x0000000000000000, 0xbe56800000000000, 0x0000001c30530197],
    [0x0000000000000000, 0x4100000000000000, 0x0000000587392bb9],
    [0x0000000000000000, 0x0000000000000000, 0x0000000d5499474a],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x0000000000000002, 0x0000000000000000, 0x0000000000000000],
    [0x000000006d00f733, 0x0000000000000000, 0x0000000000000000],
    [0x1961219000356aa4, 0x0000000000000000, 0x0000000000000000],
    [0x05280fdffdb2872e, 0x0000000005e8bb31, 0x0000000000000000],
    [0xc8bd80bb9fee5d00, 0x016035ce8b6203d3, 0x0000000000000000],
    [0x364e3104d31ce578, 0xe2d469d373af8b10, 0x000000000052015c],
    [0x4c3c76d96e5a7ba2, 0x005de5eee7ff7b2f, 0x00000015a070b327],
    [0x5102ce0017ae6886, 0x789df42398391deb, 0x0000000914aaa2c4],
    [0x280f83b12f449ffa, 0xb422d25e4cd60f16, 0x0000000ff132fd75],
    [0x4c650f72dfe2d9ba, 0xc26df6e01677284b, 0x0000001b67af4391],
    [0x82e49b4da0e59e23, 0xecc7cbb19db2a9a2, 0x00000004228c5176],
    [0xb352f6885f6b9b30, 0x1eeb310179c7a898, 0x0000001bb07a52f8],
    [0x328ececa31df0217, 0x669f700e28387c39, 0x0000001bf7c1962c],
    [0xae4bf0fc846c2bae, 0x7a3462587b147575, 0x0000000a567f83b6],
    [0x1693d7a089c23263, 0xe331927eeca535c1, 0x0000000caf1a929a],
    [0x5e774d222b6aa27f, 0x7e7c958032c60372, 0x00000006429e4fda],
    [0x696ca7daee1ee9c4, 0xc8c955f9ad4a9115, 0x0000001511de3534],
    [0x2b071e5d1ca8f4c2, 0x20f971080ca85b3c, 0x0000000c4a30d65d],
    [0x5793a6a94310ec77, 0xacf2c44a981a003b, 0x00000015aee8cf1f],
    [0xc5c8cd98e510d889, 0xd4d059b655108955, 0x000000076002fbbe],
    [0x5cff52c8fd8f96da, 0x6413dab86e8bf03e, 0x0000000ea1099def],
    [0x96ab3838230aff74, 0xbf0247c75083ff0d, 0x00000019ef6aac51],
    [0xdc34e923e8294f2d, 0xea1820b7b726d1d7, 0x000000130872eea1],
    [0x461183496ea98611, 0x0f8b163b9d2efd51, 0x00000007e57524c5],
    [0xb84595324a564e5c, 0xdca16cad31ec5114, 0x000000101456e60e],
    [0x3f1c4aa25ce566d8, 0xaa72283d04e93ca5, 0x0000000375d5a73e],
    [0xa3f8de00713552a0, 0x5896db289acde004, 0x0000000e972c4a70],
    [0x0587bd72a7724000, 0x3b089ca04758a842, 0x0000001a2858b529],
    [0x7f0c879aa6800000, 0xf472d26863c1b4ae, 0x00000009998907db],
    [0x1a67b06100000000, 0x3bd005e1c0d2010a, 0x0000001568f01273],
    [0x46868a0000000000, 0xb5e286b7a8fbc0dc, 0x0000001ad475d9b0],
    [0x2ce4000000000000, 0x1cba983b6ef13e63, 0x0000000b575f0ed6],
    [0xe800000000000000, 0x82713c0abe3bce93, 0x000000140cb03c00],
    [0x0000000000000000, 0xf1aeb2b18c724510, 0x000000001e5ef7e1],
    [0x0000000000000000, 0x432ceb7a661ea000, 0x00000016cdebeefa],
    [0x0000000000000000, 0x4ef911e06a400000, 0x0000001c77683c4c],
    [0x0000000000000000, 0x0197be5680000000, 0x00000011c4571f44],
    [0x0000000000000000, 0x2bb9410000000000, 0x0000000fd57c9768],
    [0x0000000000000000, 0x474a000000000000, 0x00000018411031ec],
    [0x0000000000000000, 0x6400000000000000, 0x0000001935e660c4],
    [0x0000000000000000, 0x0000000000000000, 0x0000000fec661ee8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x0000000000006d01, 0x0000000000000000, 0x0000000000000000],
    [0x0000196121900036, 0x0000000000000000, 0x0000000000000000],
    [0xbb3105280fdffdb3, 0x00000000000005e8, 0x0000000000000000],
    [0x03d3c8bd80bb9fef, 0x0000016035ce8b62, 0x0000000000000000],
    [0x8b10364e3104d31d, 0x015ce2d469d373af, 0x0000000000000052],
    [0x7b2f4c3c76d96e5b, 0xb327005de5eee7ff, 0x0000001317e5ef3a],
    [0x1deb5102ce0017af, 0xa2c4789df4239839, 0x0000000daac813e8],
    [0x0f16280f83b12f45, 0xfd75b422d25e4cd6, 0x000000185cc7c26b],
    [0x284b4c650f72dfe3, 0x4391c26df6e01677, 0x0000001924b5cf51],
    [0xa9a282e49b4da0e6, 0x5176ecc7cbb19db2, 0x00000012ebb55ccf],
    [0xa898b352f6885f6c, 0x52f81eeb310179c7, 0x0000001277bc0064],
    [0x7c39328ececa31e0, 0x962c669f700e2838, 0x000000175bc841da],
    [0x7575ae4bf0fc846d, 0x83b67a3462587b14, 0x0000001517620cdb],
    [0x35c11693d7a089c3, 0x929ae331927eeca5, 0x000000154eb07fdd],
    [0x03725e774d222b6b, 0x4fda7e7c958032c6, 0x00000015c95db937],
    [0x9115696ca7daee1f, 0x3534c8c955f9ad4a, 0x0000000ce0d90999],
    [0x5b3c2b071e5d1ca9, 0xd65d20f971080ca8, 0x00000005de811002],
    [0x003b5793a6a94311, 0xcf1facf2c44a981a, 0x00000000a91ea7c4],
    [0x8955c5c8cd98e511, 0xfbbed4d059b65510, 0x0000001005573158],
    [0xf03e5cff52c8fd90, 0x9def6413dab86e8b, 0x00000014b7d2a27c],
    [0xff0d96ab3838230b, 0xac51bf0247c75083, 0x0000001d03bf82b1],
    [0xd1d7dc34e923e82a, 0xeea1ea1820b7b726, 0x0000000b90bfb22a],
    [0xfd51461183496eaa, 0x24c50f8b163b9d2e, 0x00000009fef4bea6],
    [0x5114b84595324a57, 0xe60edca16cad31ec, 0x00000008e189a223],
    [0x3ca53f1c4aa25ce6, 0xa73eaa72283d04e9, 0x000000085bba2551],
    [0xe004a3f8de007136, 0x4a705896db289acd, 0x0000001302ea7af2],
    [0xa8420587bd72a773, 0xb5293b089ca04758, 0x0000001a9c42dabc],
    [0xb4ae7f0c879aa680, 0x07dbf472d26863c1, 0x0000000e2275625b],
    [0x010a1a67b0610000, 0x12733bd005e1c0d2, 0x0000001531da3fdb],
    [0xc0dc46868a000000, 0xd9b0b5e286b7a8fb, 0x00000015345184a9],
    [0x3e632ce400000000, 0x0ed61cba983b6ef1, 0x00000009be79b3fe],
    [0xce93e80000000000, 0x3c0082713c0abe3b, 0x0000001d59a3bd21],
    [0x4510000000000000, 0xf7e1f1aeb2b18c72, 0x00000007bcec6fb6],
    [0xa000000000000000, 0xeefa432ceb7a661e, 0x0000000ccc5d9036],
    [0x0000000000000000, 0x3c4c4ef911e06a40, 0x0000000cca4ac899],
    [0x0000000000000000, 0x1f440197be568000, 0x00000005e027c5af],
    [0x0000000000000000, 0x97682bb941000000, 0x0000000af8b2a9f2],
    [0x0000000000000000, 0x31ec474a00000000, 0x0000001aae2e8236],
    [0x0000000000000000, 0x60c4640000000000, 0x0000000c9e463ff5],
    [0x0000000000000000, 0x1ee8000000000000, 0x0000001b5446178b],
    [0x0000000000000000, 0x1000000000000000, 0x0000000296d8d5f3],
    [0x0000000000000000, 0x0000000000000000, 0x0000001aca426aa0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x0000000019612191, 0x0000000000000000, 0x0000000000000000],
    [0x05e8bb3105280fe0, 0x0000000000000000, 0x0000000000000000],
    [0x8b6203d3c8bd80bc, 0x00000000016035ce, 0x0000000000000000],
    [0x73af8b10364e3105, 0x0052015ce2d469d3, 0x0000000000000000],
    [0xe7ff7b2f4c3c76da, 0xef3ab327005de5ee, 0x00000000001317e5],
    [0x98391deb5102ce01, 0x13e8a2c4789df423, 0x00000017bbc4df5e],
    [0x4cd60f16280f83b2, 0xc26bfd75b422d25e, 0x00000015e778d32a],
    [0x1677284b4c650f73, 0xcf514391c26df6e0, 0x00000009f4a995c9],
    [0x9db2a9a282e49b4e, 0x5ccf5176ecc7cbb1, 0x000000112f68af0b],
    [0x79c7a898b352f689, 0x006452f81eeb3101, 0x00000002a54293b9],
    [0x28387c39328ececb, 0x41da962c669f700e, 0x0000000d458e55c8],
    [0x7b147575ae4bf0fd, 0x0cdb83b67a346258, 0x00000010d2de0211],
    [0xeca535c11693d7a1, 0x7fdd929ae331927e, 0x00000003f845c78d],
    [0x32c603725e774d23, 0xb9374fda7e7c9580, 0x0000000324a1a2f8],
    [0xad4a9115696ca7db, 0x09993534c8c955f9, 0x0000001c1bae6cd3],
    [0x0ca85b3c2b071e5e, 0x1002d65d20f97108, 0x00000013556b9b00],
    [0x981a003b5793a6aa, 0xa7c4cf1facf2c44a, 0x0000000003ba55be],
    [0x55108955c5c8cd99, 0x3158fbbed4d059b6, 0x0000000e968cb882],
    [0x6e8bf03e5cff52c9, 0xa27c9def6413dab8, 0x0000000082b2ec7c],
    [0x5083ff0d96ab3839, 0x82b1ac51bf0247c7, 0x0000001d04cecf93],
    [0xb726d1d7dc34e924, 0xb22aeea1ea1820b7, 0x000000048aeaf6b8],
    [0x9d2efd514611834a, 0xbea624c50f8b163b, 0x0000000d3357cf68],
    [0x31ec5114b8459533, 0xa223e60edca16cad, 0x000000186345a0da],
    [0x04e93ca53f1c4aa3, 0x2551a73eaa72283d, 0x000000151a2b538e],
    [0x9acde004a3f8de01, 0x7af24a705896db28, 0x000000034b276e1c],
    [0x4758a8420587bd73, 0xdabcb5293b089ca0, 0x00000006a18e45eb],
    [0x63c1b4ae7f0c879b, 0x625b07dbf472d268, 0x000000191ca02dde],
    [0xc0d2010a1a67b061, 0x3fdb12733bd005e1, 0x00000015f9bc9f2e],
    [0xa8fbc0dc46868a00, 0x84a9d9b0b5e286b7, 0x0000000ac4ae656c],
    [0x6ef13e632ce40000, 0xb3fe0ed61cba983b, 0x0000001944309406],
    [0xbe3bce93e8000000, 0xbd213c0082713c0a, 0x000000018f891e46],
    [0x8c72451000000000, 0x6fb6f7e1f1aeb2b1, 0x00000010785c400e],
    [0x661ea00000000000, 0x9036eefa432ceb7a, 0x000000035c79c358],
    [0x6a40000000000000, 0xc8993c4c4ef911e0, 0x000000149ec94bea],
    [0x8000000000000000, 0xc5af1f440197be56, 0x00000018dccc3f5c],
    [0x0000000000000000, 0xa9f297682bb94100, 0x0000001599a77b89],
    [0x0000000000000000, 0x823631ec474a0000, 0x000000024002c4ed],
    [0x0000000000000000, 0x3ff560c464000000, 0x000000197f393ada],
    [0x0000000000000000, 0x178b1ee800000000, 0x00000015034f3d61],
    [0x0000000000000000, 0xd5f3100000000000, 0x000000169b21d663],
    [0x0000000000000000, 0x6aa0000000000000, 0x000000173eac7fb9],
    [0x0000000000000000, 0x4000000000000000, 0x0000000d5e4a5262],
    [0x0000000000000000, 0x0000000000000000, 0x00000016e0280680],
    [0x0000000000001962, 0x0000000000000000, 0x0000000000000000],
    [0x000005e8bb310529, 0x0000000000000000, 0x0000000000000000],
    [0x35ce8b6203d3c8be, 0x0000000000000160, 0x0000000000000000],
    [0x69d373af8b10364f, 0x00000052015ce2d4, 0x0000000000000000],
    [0xe5eee7ff7b2f4c3d, 0x17e5ef3ab327005d, 0x0000000000000013],
    [0xf42398391deb5103, 0xdf5e13e8a2c4789d, 0x00000004720d6f4f],
    [0xd25e4cd60f162810, 0xd32ac26bfd75b422, 0x0000001298c6136e],
    [0xf6e01677284b4c66, 0x95c9cf514391c26d, 0x00000019cdad5527],
    [0xcbb19db2a9a282e5, 0xaf0b5ccf5176ecc7, 0x000000093774da5f],
    [0x310179c7a898b353, 0x93b9006452f81eeb, 0x0000001647326b58],
    [0x700e28387c39328f, 0x55c841da962c669f, 0x000000149f9a64f1],
    [0x62587b147575ae4c, 0x02110cdb83b67a34, 0x0000001a634c2f55],
    [0x927eeca535c11694, 0xc78d7fdd929ae331, 0x00000013cae03fd9],
    [0x958032c603725e78, 0xa2f8b9374fda7e7c, 0x00000014e7467f0c],
    [0x55f9ad4a9115696d, 0x6cd309993534c8c9, 0x00000002f13354e7],
    [0x71080ca85b3c2b08, 0x9b001002d65d20f9, 0x00000018149db608],
    [0xc44a981a003b5794, 0x55bea7c4cf1facf2, 0x0000000200ed0c08],
    [0x59b655108955c5c9, 0xb8823158fbbed4d0, 0x00000001f0cd1903],
    [0xdab86e8bf03e5d00, 0xec7ca27c9def6413, 0x00000000ddc5ef47],
    [0x47c75083ff0d96ac, 0xcf9382b1ac51bf02, 0x00000010befdbd06],
    [0x20b7b726d1d7dc35, 0xf6b8b22aeea1ea18, 0x0000000195f53da5],
    [0x163b9d2efd514612, 0xcf68bea624c50f8b, 0x00000008d6d0f0d8],
    [0x6cad31ec5114b846, 0xa0daa223e60edca1, 0x00000014ad7ffc9b],
    [0x283d04e93ca53f1d, 0x538e2551a73eaa72, 0x000000066ec6f3d0],
    [0xdb289acde004a3f9, 0x6e1c7af24a705896, 0x00000012b3d3680a],
    [0x9ca04758a8420588, 0x45ebdabcb5293b08, 0x000000026daf085a],
    [0xd26863c1b4ae7f0d, 0x2dde625b07dbf472, 0x0000001504b2a677],
    [0x05e1c0d2010a1a68, 0x9f2e3fdb12733bd0, 0x0000001bbfa1e2a3],
    [0x86b7a8fbc0dc4687, 0x656c84a9d9b0b5e2, 0x000000084b398624],
    [0x983b6ef13e632ce4, 0x9406b3fe0ed61cba, 0x000000087961bde2],
    [0x3c0abe3bce93e800, 0x1e46bd213c008271, 0x00000016f3b86051],
    [0xb2b18c7245100000, 0x400e6fb6f7e1f1ae, 0x00000012e3068608],
    [0xeb7a661ea0000000, 0xc3589036eefa432c, 0x00000001ebc05ef9],
    [0x11e06a4000000000, 0x4beac8993c4c4ef9, 0x0000001c59a500a7],
    [0xbe56800000000000, 0x3f5cc5af1f440197, 0x000000092641c95f],
    [0x4100000000000000, 0x7b89a9f297682bb9, 0x000000162d31a75d],
    [0x0000000000000000, 0xc4ed823631ec474a, 0x00000015c3fece75],
    [0x0000000000000000, 0x3ada3ff560c46400, 0x0000001b6b982146],
    [0x0000000000000000, 0x3d61178b1ee80000, 0x000000105a071e78],
    [0x0000000000000000, 0xd663d5f310000000, 0x0000001bfed92d43],
    [0x0000000000000000, 0x7fb96aa000000000, 0x0000000fcb6d8188],
    [0x0000000000000000, 0x5262400000000000, 0x00000001fa9345e5],
    [0x0000000000000000, 0x0680000000000000, 0x00000017974026dc],
    [0x0000000000000000, 0x0000000000000000, 0x000000156d240621],
    [0x0000000000000000, 0x0000000000000000, 0x00000007aef40a00],
    [0x0000000005e8bb32, 0x0000000000000000, 0x0000000000000000],
    [0x016035ce8b6203d4, 0x0000000000000000, 0x0000000000000000],
    [0xe2d469d373af8b11, 0x000000000052015c, 0x0000000000000000],
    [0x005de5eee7ff7b30, 0x001317e5ef3ab327, 0x0000000000000000],
    [0x789df42398391dec, 0x6f4fdf5e13e8a2c4, 0x000000000004720d],
    [0xb422d25e4cd60f17, 0x136ed32ac26bfd75, 0x0000000320c6f85c],
    [0xc26df6e01677284c, 0x552795c9cf514391, 0x000000157026e2ab],
    [0xecc7cbb19db2a9a3, 0xda5faf0b5ccf5176, 0x0000000a16d38a86],
    [0x1eeb310179c7a899, 0x6b5893b9006452f8, 0x000000019878d336],
    [0x669f700e28387c3a, 0x64f155c841da962c, 0x0000000caba4ee08],
    [0x7a3462587b147576, 0x2f5502110cdb83b6, 0x00000001f456f799],
    [0xe331927eeca535c2, 0x3fd9c78d7fdd929a, 0x00000005dd22eff6],
    [0x7e7c958032c60373, 0x7f0ca2f8b9374fda, 0x0000001b8836e861],
    [0xc8c955f9ad4a9116, 0x54e76cd309993534, 0x00000016b33b4569],
    [0x20f971080ca85b3d, 0xb6089b001002d65d, 0x000000188641864a],
    [0xacf2c44a981a003c, 0x0c0855bea7c4cf1f, 0x0000001165207089],
    [0xd4d059b655108956, 0x1903b8823158fbbe, 0x000000021b3e4c45],
    [0x6413dab86e8bf03f, 0xef47ec7ca27c9def, 0x00000010168b6d7f],
    [0xbf0247c75083ff0e, 0xbd06cf9382b1ac51, 0x0000001dc9807793],
    [0xea1820b7b726d1d8, 0x3da5f6b8b22aeea1, 0x00000004987fdb17],
    [0x0f8b163b9d2efd52, 0xf0d8cf68bea624c5, 0x000000056942ac57],
    [0xdca16cad31ec5115, 0xfc9ba0daa223e60e, 0x0000001479ae3e44],
    [0xaa72283d04e93ca6, 0xf3d0538e2551a73e, 0x000000100fee4303],
    [0x5896db289acde005, 0x680a6e1c7af24a70, 0x00000000eb94ccf6],
    [0x3b089ca04758a843, 0x085a45ebdabcb529, 0x0000001b91926bbf],
    [0xf472d26863c1b4af, 0xa6772dde625b07db, 0x0000000ead099102],
    [0x3bd005e1c0d2010b, 0xe2a39f2e3fdb1273, 0x000000009df7b29d],
    [0xb5e286b7a8fbc0dd, 0x8624656c84a9d9b0, 0x00000006f54da0f2],
    [0x1cba983b6ef13e64, 0xbde29406b3fe0ed6, 0x0000001aaa29731d],
    [0x82713c0abe3bce94, 0x60511e46bd213c00, 0x00000006ecbeea3f],
    [0xf1aeb2b18c724510, 0x8608400e6fb6f7e1, 0x0000000ec184a4c6],
    [0x432ceb7a661ea000, 0x5ef9c3589036eefa, 0x000000106b882d7c],
    [0x4ef911e06a400000, 0x00a74beac8993c4c, 0x0000001cf516d536],
    [0x0197be5680000000, 0xc95f3f5cc5af1f44, 0x0000000c92cd8fa6],
    [0x2bb9410000000000, 0xa75d7b89a9f29768, 0x0000000907dcb1cb],
    [0x474a000000000000, 0xce75c4ed823631ec, 0x000000119d50ebc4],
    [0x6400000000000000, 0x21463ada3ff560c4, 0x00000010052fa224],
    [0x0000000000000000, 0x1e783d61178b1ee8, 0x000000086983b611],
    [0x0000000000000000, 0x2d43d663d5f31000, 0x00000003fc5f8c85],
    [0x0000000000000000, 0x81887fb96aa00000, 0x00000001348ff2ef],
    [0x0000000000000000, 0x45e5526240000000, 0x00000019f6465dc2],
    [0x0000000000000000, 0x26dc068000000000, 0x0000000f6e2e3117],
    [0x0000000000000000, 0x0621000000000000, 0x0000000563f45a85],
    [0x0000000000000000, 0x0a00000000000000, 0x000000012b7341b0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000b2f59ebe4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x00000000000005e9, 0x0000000000000000, 0x0000000000000000],
    [0x0000016035ce8b63, 0x0000000000000000, 0x0000000000000000],
    [0x015ce2d469d373b0, 0x0000000000000052, 0x0000000000000000],
    [0xb327005de5eee800, 0x0000001317e5ef3a, 0x0000000000000000],
    [0xa2c4789df423983a, 0x720d6f4fdf5e13e8, 0x0000000000000004],
    [0xfd75b422d25e4cd7, 0xf85c136ed32ac26b, 0x0000000108f936ba],
    [0x4391c26df6e01678, 0xe2ab552795c9cf51, 0x0000000dbae527d6],
    [0x5176ecc7cbb19db3, 0x8a86da5faf0b5ccf, 0x000000143ac6668c],
    [0x52f81eeb310179c8, 0xd3366b5893b90064, 0x00000002eb824ec1],
    [0x962c669f700e2839, 0xee0864f155c841da, 0x0000000f537a8a22],
    [0x83b67a3462587b15, 0xf7992f5502110cdb, 0x0000000821fab022],
    [0x929ae331927eeca6, 0xeff63fd9c78d7fdd, 0x000000082434d76d],
    [0x4fda7e7c958032c7, 0xe8617f0ca2f8b937, 0x0000001998c6da31],
    [0x3534c8c955f9ad4b, 0x456954e76cd30999, 0x0000000b9ebba44b],
    [0xd65d20f971080ca9, 0x864ab6089b001002, 0x0000001186826cb3],
    [0xcf1facf2c44a981b, 0x70890c0855bea7c4, 0x0000000bff1aa8dc],
    [0xfbbed4d059b65511, 0x4c451903b8823158, 0x0000001585d43903],
    [0x9def6413dab86e8c, 0x6d7fef47ec7ca27c, 0x00000000c4926883],
    [0xac51bf0247c75084, 0x7793bd06cf9382b1, 0x00000000cc4f0f82],
    [0xeea1ea1820b7b727, 0xdb173da5f6b8b22a, 0x00000000930cedca],
    [0x24c50f8b163b9d2f, 0xac57f0d8cf68bea6, 0x000000116dc13810],
    [0xe60edca16cad31ed, 0x3e44fc9ba0daa223, 0x00000003e1cd1966],
    [0xa73eaa72283d04ea, 0x4303f3d0538e2551, 0x00000017ce2c08da],
    [0x4a705896db289ace, 0xccf6680a6e1c7af2, 0x0000001504057272],
    [0xb5293b089ca04759, 0x6bbf085a45ebdabc, 0x0000001abaa6abef],
    [0x07dbf472d26863c2, 0x9102a6772dde625b, 0x00000019f133c2dc],
    [0x12733bd005e1c0d3, 0xb29de2a39f2e3fdb, 0x000000158d63e261],
    [0xd9b0b5e286b7a8fc, 0xa0f28624656c84a9, 0x00000016bf3ced26],
    [0x0ed61cba983b6ef2, 0x731dbde29406b3fe, 0x00000008fe7331ce],
    [0x3c0082713c0abe3c, 0xea3f60511e46bd21, 0x0000001243f7017c],
    [0xf7e1f1aeb2b18c73, 0xa4c68608400e6fb6, 0x0000001d15841628],
    [0xeefa432ceb7a661f, 0x2d7c5ef9c3589036, 0x00000009768cf255],
    [0x3c4c4ef911e06a40, 0xd53600a74beac899, 0x00000013d4fc3c98],
    [0x1f440197be568000, 0x8fa6c95f3f5cc5af, 0x00000005c8274cdf],
    [0x97682bb941000000, 0xb1cba75d7b89a9f2, 0x000000163fe34217],
    [0x31ec474a00000000, 0xebc4ce75c4ed8236, 0x00000005844d965f],
    [0x60c4640000000000, 0xa22421463ada3ff5, 0x000000165555e002],
    [0x1ee8000000000000, 0xb6111e783d61178b, 0x000000009cf5f157],
    [0x1000000000000000, 0x8c852d43d663d5f3, 0x000000146bfeadfb],
    [0x0000000000000000, 0xf2ef81887fb96aa0, 0x0000001cc416b66c],
    [0x0000000000000000, 0x5dc245e552624000, 0x000000195ddd4e9f],
    [0x0000000000000000, 0x311726dc06800000, 0x000000074d92ecf5],
    [0x0000000000000000, 0x5a85062100000000, 0x0000001b492c569e],
    [0x0000000000000000, 0x41b00a0000000000, 0x0000000711370fdc],
    [0x0000000000000000, 0xebe4000000000000, 0x000000157aebe208],
    [0x0000000000000000, 0xe800000000000000, 0x0000000213c27d49],
    [0x0000000000000000, 0x0000000000000000, 0x000000113527e110],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x00000000016035cf, 0x0000000000000000, 0x0000000000000000],
    [0x0052015ce2d469d4, 0x0000000000000000, 0x0000000000000000],
    [0xef3ab327005de5ef, 0x00000000001317e5, 0x0000000000000000],
    [0x13e8a2c4789df424, 0x0004720d6f4fdf5e, 0x0000000000000000],
    [0xc26bfd75b422d25f, 0x36baf85c136ed32a, 0x00000000000108f9],
    [0xcf514391c26df6e1, 0x27d6e2ab552795c9, 0x0000001c38e7a8e6],
    [0x5ccf5176ecc7cbb2, 0x668c8a86da5faf0b, 0x00000017c8f318f1],
    [0x006452f81eeb3102, 0x4ec1d3366b5893b9, 0x0000001a67338f63],
    [0x41da962c669f700f, 0x8a22ee0864f155c8, 0x000000171f32686b],
    [0x0cdb83b67a346259, 0xb022f7992f550211, 0x0000001909dc00de],
    [0x7fdd929ae331927f, 0xd76deff63fd9c78d, 0x000000160bd8bb14],
    [0xb9374fda7e7c9581, 0xda31e8617f0ca2f8, 0x00000004da40606c],
    [0x09993534c8c955fa, 0xa44b456954e76cd3, 0x00000019581aa6bf],
    [0x1002d65d20f97109, 0x6cb3864ab6089b00, 0x0000000ed15865ea],
    [0xa7c4cf1facf2c44b, 0xa8dc70890c0855be, 0x00000018c766bdb7],
    [0x3158fbbed4d059b7, 0x39034c451903b882, 0x0000000cf5924dc9],
    [0xa27c9def6413dab9, 0x68836d7fef47ec7c, 0x000000110c69d58c],
    [0x82b1ac51bf0247c8, 0x0f827793bd06cf93, 0x00000002e396f3c4],
    [0xb22aeea1ea1820b8, 0xedcadb173da5f6b8, 0x0000000fd8ba1a47],
    [0xbea624c50f8b163c, 0x3810ac57f0d8cf68, 0x00000010bf4b8e28],
    [0xa223e60edca16cae, 0x19663e44fc9ba0da, 0x000000095d3d4dfd],
    [0x2551a73eaa72283e, 0x08da4303f3d0538e, 0x0000001d207e8de6],
    [0x7af24a705896db29, 0x7272ccf6680a6e1c, 0x00000017c1bc23ba],
    [0xdabcb5293b089ca1, 0xabef6bbf085a45eb, 0x0000000d9bb76c9a],
    [0x625b07dbf472d269, 0xc2dc9102a6772dde, 0x0000000635c0a786],
    [0x3fdb12733bd005e2, 0xe261b29de2a39f2e, 0x0000000192ff63dc],
    [0x84a9d9b0b5e286b8, 0xed26a0f28624656c, 0x00000015a055fd90],
    [0xb3fe0ed61cba983c, 0x31ce731dbde29406, 0x00000003f0e3eb75],
    [0xbd213c0082713c0b, 0x017cea3f60511e46, 0x0000001b49570406],
    [0x6fb6f7e1f1aeb2b2, 0x1628a4c68608400e, 0x0000000165f96c4e],
    [0x9036eefa432ceb7b, 0xf2552d7c5ef9c358, 0x000000122e524fe8],
    [0xc8993c4c4ef911e1, 0x3c98d53600a74bea, 0x000000186f4e37f0],
    [0xc5af1f440197be57, 0x4cdf8fa6c95f3f5c, 0x0000001a21d43ce4],
    [0xa9f297682bb94100, 0x4217b1cba75d7b89, 0x000000175a5ce940],
    [0x823631ec474a0000, 0x965febc4ce75c4ed, 0x0000000ef615ec61],
    [0x3ff560c464000000, 0xe002a22421463ada, 0x00000016b8a991b1],
    [0x178b1ee800000000, 0xf157b6111e783d61, 0x0000000b9cc8b7b5],
    [0xd5f3100000000000, 0xadfb8c852d43d663, 0x0000000c8f3cf628],
    [0x6aa0000000000000, 0xb66cf2ef81887fb9, 0x0000000978b1bbfd],
    [0x4000000000000000, 0x4e9f5dc245e55262, 0x0000001d450e0b79],
    [0x0000000000000000, 0xecf5311726dc0680, 0x0000001c3e77be83],
    [0x0000000000000000, 0x569e5a8506210000, 0x00000000e9fc26c9],
    [0x0000000000000000, 0x0fdc41b00a000000, 0x00000011134e7878],
    [0x0000000000000000, 0xe208ebe400000000, 0x0000001bf4400a26],
    [0x0000000000000000, 0x7d49e80000000000, 0x000000090d9ab616],
    [0x0000000000000000, 0xe110000000000000, 0x000000053c7925c9],
    [0x0000000000000000, 0xa000000000000000, 0x00000011338a5f36],
    [0x0000000000000000, 0x0000000000000000, 0x0000000cb7e75a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x0000000000000161, 0x0000000000000000, 0x0000000000000000],
    [0x00000052015ce2d5, 0x0000000000000000, 0x0000000000000000],
    [0x17e5ef3ab327005e, 0x0000000000000013, 0x0000000000000000],
    [0xdf5e13e8a2c4789e, 0x00000004720d6f4f, 0x0000000000000000],
    [0xd32ac26bfd75b423, 0x08f936baf85c136e, 0x0000000000000001],
    [0x95c9cf514391c26e, 0xa8e627d6e2ab5527, 0x000000003db1a69c],
    [0xaf0b5ccf5176ecc8, 0x18f1668c8a86da5f, 0x00000006ac4142e8],
    [0x93b9006452f81eec, 0x8f634ec1d3366b58, 0x000000183cb0c788],
    [0x55c841da962c66a0, 0x686b8a22ee0864f1, 0x00000001fe38e608],
    [0x02110cdb83b67a35, 0x00deb022f7992f55, 0x00000001f5263bec],
    [0xc78d7fdd929ae332, 0xbb14d76deff63fd9, 0x000000192581113d],
    [0xa2f8b9374fda7e7d, 0x606cda31e8617f0c, 0x0000000e5f710dce],
    [0x6cd309993534c8ca, 0xa6bfa44b456954e7, 0x000000123f9cefda],
    [0x9b001002d65d20fa, 0x65ea6cb3864ab608, 0x000000151b3e01b9],
    [0x55bea7c4cf1facf3, 0xbdb7a8dc70890c08, 0x0000000d5d31a07d],
    [0xb8823158fbbed4d1, 0x4dc939034c451903, 0x0000001d46c0ac19],
    [0xec7ca27c9def6414, 0xd58c68836d7fef47, 0x00000005e43a2290],
    [0xcf9382b1ac51bf03, 0xf3c40f827793bd06, 0x00000003eb651b0d],
    [0xf6b8b22aeea1ea19, 0x1a47edcadb173da5, 0x000000033f9dd5dd],
    [0xcf68bea624c50f8c, 0x8e283810ac57f0d8, 0x00000015ad59d9cf],
    [0xa0daa223e60edca2, 0x4dfd19663e44fc9b, 0x0000001285dd8f49],
    [0x538e2551a73eaa73, 0x8de608da4303f3d0, 0x00000011114c16a5],
    [0x6e1c7af24a705897, 0x23ba7272ccf6680a, 0x00000008be690263],
    [0x45ebdabcb5293b09, 0x6c9aabef6bbf085a, 0x00000017152db0ba],
    [0x2dde625b07dbf473, 0xa786c2dc9102a677, 0x0000000d9a5b145d],
    [0x9f2e3fdb12733bd1, 0x63dce261b29de2a3, 0x00000015ce3cbc2a],
    [0x656c84a9d9b0b5e3, 0xfd90ed26a0f28624, 0x00000009dea56dd8],
    [0x9406b3fe0ed61cbb, 0xeb7531ce731dbde2, 0x00000014b83f27ea],
    [0x1e46bd213c008272, 0x0406017cea3f6051, 0x00000018e4ea04c5],
    [0x400e6fb6f7e1f1af, 0x6c4e1628a4c68608, 0x0000001011a84321],
    [0xc3589036eefa432d, 0x4fe8f2552d7c5ef9, 0x00000007c82b858a],
    [0x4beac8993c4c4efa, 0x37f03c98d53600a7, 0x0000000266a6e509],
    [0x3f5cc5af1f440198, 0x3ce44cdf8fa6c95f, 0x0000000225774a9f],
    [0x7b89a9f297682bba, 0xe9404217b1cba75d, 0x0000000745ebe519],
    [0xc4ed823631ec474a, 0xec61965febc4ce75, 0x00000006086c91ef],
    [0x3ada3ff560c46400, 0x91b1e002a2242146, 0x0000001a0f2700e1],
    [0x3d61178b1ee80000, 0xb7b5f157b6111e78, 0x00000016b792a097],
    [0xd663d5f310000000, 0xf628adfb8c852d43, 0x0000000585ae2907],
    [0x7fb96aa000000000, 0xbbfdb66cf2ef8188, 0x00000001da8bbccd],
    [0x5262400000000000, 0x0b794e9f5dc245e5, 0x000000121953e601],
    [0x0680000000000000, 0xbe83ecf5311726dc, 0x000000003e46af25],
    [0x0000000000000000, 0x26c9569e5a850621, 0x00000008c9bacb4d],
    [0x0000000000000000, 0x78780fdc41b00a00, 0x00000011f6969caf],
    [0x0000000000000000, 0x0a26e208ebe40000, 0x0000000b0d7798f0],
    [0x0000000000000000, 0xb6167d49e8000000, 0x0000001a1615797e],
    [0x0000000000000000, 0x25c9e11000000000, 0x0000001d8094b415],
    [0x0000000000000000, 0x5f36a00000000000, 0x00000004ec7ef221],
    [0x0000000000000000, 0x5a40000000000000, 0x00000007c51f32dd],
    [0x0000000000000000, 0x8000000000000000, 0x00000015bc3eb3b6],
    [0x0000000000000000, 0x0000000000000000, 0x0000000cb0740100],
    [0x000000000052015d, 0x0000000000000000, 0x0000000000000000],
    [0x001317e5ef3ab328, 0x0000000000000000, 0x0000000000000000],
    [0x6f4fdf5e13e8a2c5, 0x000000000004720d, 0x0000000000000000],
    [0x136ed32ac26bfd76, 0x000108f936baf85c, 0x0000000000000000],
    [0x552795c9cf514392, 0xa69ca8e627d6e2ab, 0x0000000000003db1],
    [0xda5faf0b5ccf5177, 0x42e818f1668c8a86, 0x0000000b8f6b82a2],
    [0x6b5893b9006452f9, 0xc7888f634ec1d336, 0x00000007fa22c629],
    [0x64f155c841da962d, 0xe608686b8a22ee08, 0x00000009ba3f78a3],
    [0x2f5502110cdb83b7, 0x3bec00deb022f799, 0x000000085bb8a4a2],
    [0x3fd9c78d7fdd929b, 0x113dbb14d76deff6, 0x00000007f8827374],
    [0x7f0ca2f8b9374fdb, 0x0dce606cda31e861, 0x0000001b06272edb],
    [0x54e76cd309993535, 0xefdaa6bfa44b4569, 0x00000015333cb743],
    [0xb6089b001002d65e, 0x01b965ea6cb3864a, 0x0000000fd15b4939],
    [0x0c0855bea7c4cf20, 0xa07dbdb7a8dc7089, 0x0000000d45ddbf60],
    [0x1903b8823158fbbf, 0xac194dc939034c45, 0x000000167f69c500],
    [0xef47ec7ca27c9df0, 0x2290d58c68836d7f, 0x000000002811e3f2],
    [0xbd06cf9382b1ac52, 0x1b0df3c40f827793, 0x0000001a92fa3b9e],
    [0x3da5f6b8b22aeea2, 0xd5dd1a47edcadb17, 0x0000000702703eeb],
    [0xf0d8cf68bea624c6, 0xd9cf8e283810ac57, 0x000000191b7db2d0],
    [0xfc9ba0daa223e60f, 0x8f494dfd19663e44, 0x00000012d315a87c],
    [0xf3d0538e2551a73f, 0x16a58de608da4303, 0x0000001d00566022],
    [0x680a6e1c7af24a71, 0x026323ba7272ccf6, 0x00000007efd4ad2a],
    [0x085a45ebdabcb52a, 0xb0ba6c9aabef6bbf, 0x00000009c7f36ec1],
    [0xa6772dde625b07dc, 0x145da786c2dc9102, 0x0000000f4b731ca0],
    [0xe2a39f2e3fdb1274, 0xbc2a63dce261b29d, 0x0000000778172604],
    [0x8624656c84a9d9b1, 0x6dd8fd90ed26a0f2, 0x000000011a3ab2fd],
    [0xbde29406b3fe0ed7, 0x27eaeb7531ce731d, 0x0000001d34280fa6],
    [0x60511e46bd213c01, 0x04c50406017cea3f, 0x00000008e2454315],
    [0x8608400e6fb6f7e2, 0x43216c4e1628a4c6, 0x00000004e4cedc35],
    [0x5ef9c3589036eefb, 0x858a4fe8f2552d7c, 0x0000000c66ad1d09],
    [0x00a74beac8993c4d, 0xe50937f03c98d536, 0x000000023788b8fd],
    [0xc95f3f5cc5af1f45, 0x4a9f3ce44cdf8fa6, 0x0000001d4fe83e29],
    [0xa75d7b89a9f29769, 0xe519e9404217b1cb, 0x000000099d2a2bb4],
    [0xce75c4ed823631ed, 0x91efec61965febc4, 0x0000000c50c8871e],
    [0x21463ada3ff560c5, 0x00e191b1e002a224, 0x000000071e1e34f6],
    [0x1e783d61178b1ee8, 0xa097b7b5f157b611, 0x0000001b798da0f7],
    [0x2d43d663d5f31000, 0x2907f628adfb8c85, 0x0000001bda57f753],
    [0x81887fb96aa00000, 0xbccdbbfdb66cf2ef, 0x000000135cbd22e5],
    [0x45e5526240000000, 0xe6010b794e9f5dc2, 0x00000017b0074510],
    [0x26dc068000000000, 0xaf25be83ecf53117, 0x00000003ef39efc2],
    [0x0621000000000000, 0xcb4d26c9569e5a85, 0x0000000f86afadd0],
    [0x0a00000000000000, 0x9caf78780fdc41b0, 0x00000012cfb4d4c4],
    [0x0000000000000000, 0x98f00a26e208ebe4, 0x0000000ff998d5f4],
    [0x0000000000000000, 0x797eb6167d49e800, 0x0000001b25bf536a],
    [0x0000000000000000, 0xb41525c9e1100000, 0x00000018ca614e0e],
    [0x0000000000000000, 0xf2215f36a0000000, 0x000000036c64ce86],
    [0x0000000000000000, 0x32dd5a4000000000, 0x000000019e00d413],
    [0x0000000000000000, 0xb3b6800000000000, 0x000000047854c317],
    [0x0000000000000000, 0x0100000000000000, 0x0000000584bfdf17],
    [0x0000000000000000, 0x0000000000000000, 0x000000055b23c0ca],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x0000000000000053, 0x0000000000000000, 0x0000000000000000],
    [0x0000001317e5ef3b, 0x0000000000000000, 0x0000000000000000],
    [0x720d6f4fdf5e13e9, 0x0000000000000004, 0x0000000000000000],
    [0xf85c136ed32ac26c, 0x0000000108f936ba, 0x0000000000000000],
    [0xe2ab552795c9cf52, 0x3db1a69ca8e627d6, 0x0000000000000000],
    [0x8a86da5faf0b5cd0, 0x82a242e818f1668c, 0x000000000e5d3ef2],
    [0xd3366b5893b90065, 0xc629c7888f634ec1, 0x0000001aa958561b],
    [0xee0864f155c841db, 0x78a3e608686b8a22, 0x000000067776c07b],
    [0xf7992f5502110cdc, 0xa4a23bec00deb022, 0x0000001cbf75c5cd],
    [0xeff63fd9c78d7fde, 0x7374113dbb14d76d, 0x0000001213e3b14f],
    [0xe8617f0ca2f8b938, 0x2edb0dce606cda31, 0x000000127fa5e4e5],
    [0x456954e76cd3099a, 0xb743efdaa6bfa44b, 0x000000178efa82ed],
    [0x864ab6089b001003, 0x493901b965ea6cb3, 0x000000198b9379c1],
    [0x70890c0855bea7c5, 0xbf60a07dbdb7a8dc, 0x0000000f3359b377],
    [0x4c451903b8823159, 0xc500ac194dc93903, 0x0000001be182e21f],
    [0x6d7fef47ec7ca27d, 0xe3f22290d58c6883, 0x00000007659cbb83],
    [0x7793bd06cf9382b2, 0x3b9e1b0df3c40f82, 0x00000000e7e2ff7d],
    [0xdb173da5f6b8b22b, 0x3eebd5dd1a47edca, 0x0000001d28761e63],
    [0xac57f0d8cf68bea7, 0xb2d0d9cf8e283810, 0x000000171b8283ce],
    [0x3e44fc9ba0daa224, 0xa87c8f494dfd1966, 0x0000001252cbccee],
    [0x4303f3d0538e2552, 0x602216a58de608da, 0x00000019c3bd60e6],
    [0xccf6680a6e1c7af3, 0xad2a026323ba7272, 0x00000017d60e7794],
    [0x6bbf085a45ebdabd, 0x6ec1b0ba6c9aabef, 0x00000004d0692a75],
    [0x9102a6772dde625c, 0x1ca0145da786c2dc, 0x0000001b5787eda4],
    [0xb29de2a39f2e3fdc, 0x2604bc2a63dce261, 0x00000008686e9b94],
    [0xa0f28624656c84aa, 0xb2fd6dd8fd90ed26, 0x00000004b0f1dc36],
    [0x731dbde29406b3ff, 0x0fa627eaeb7531ce, 0x0000000cbc533e01],
    [0xea3f60511e46bd22, 0x431504c50406017c, 0x000000003f3f8b80],
    [0xa4c68608400e6fb7, 0xdc3543216c4e1628, 0x000000000f9e67ac],
    [0x2d7c5ef9c3589037, 0x1d09858a4fe8f255, 0x0000000a71e02445],
    [0xd53600a74beac89a, 0xb8fde50937f03c98, 0x00000010177b326a],
    [0x8fa6c95f3f5cc5b0, 0x3e294a9f3ce44cdf, 0x00000018d92a027d],
    [0xb1cba75d7b89a9f3, 0x2bb4e519e9404217, 0x0000001d290dbc16],
    [0xebc4ce75c4ed8237, 0x871e91efec61965f, 0x00000005297a7a1b],
    [0xa22421463ada3ff6, 0x34f600e191b1e002, 0x0000000668c90ca4],
    [0xb6111e783d61178c, 0xa0f7a097b7b5f157, 0x000000086e191ffa],
    [0x8c852d43d663d5f4, 0xf7532907f628adfb, 0x0000001c8d3ea9fc],
    [0xf2ef81887fb96aa0, 0x22e5bccdbbfdb66c, 0x0000001d188f8da3],
    [0x5dc245e552624000, 0x4510e6010b794e9f, 0x000000082e49aa40],
    [0x311726dc06800000, 0xefc2af25be83ecf5, 0x0000000ef6c727ab],
    [0x5a85062100000000, 0xadd0cb4d26c9569e, 0x0000000a3ad2c4aa],
    [0x41b00a0000000000, 0xd4c49caf78780fdc, 0x00000009efdd5b9b],
    [0xebe4000000000000, 0xd5f498f00a26e208, 0x000000067add4445],
    [0xe800000000000000, 0x536a797eb6167d49, 0x0000001042892f36],
    [0x0000000000000000, 0x4e0eb41525c9e110, 0x0000000ca61295df],
    [0x0000000000000000, 0xce86f2215f36a000, 0x00000016309d8bf0],
    [0x0000000000000000, 0xd41332dd5a400000, 0x0000001a43ce59f1],
    [0x0000000000000000, 0xc317b3b680000000, 0x0000001a80b3d19c],
    [0x0000000000000000, 0xdf17010000000000, 0x00000006b25a849d],
    [0x0000000000000000, 0xc0ca000000000000, 0x00000006f47a1319],
    [0x0000000000000000, 0x6400000000000000, 0x00000005ff00d9a3],
    [0x0000000000000000, 0x0000000000000000, 0x000000083d7214e8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x00000000001317e6, 0x0000000000000000, 0x0000000000000000],
    [0x0004720d6f4fdf5f, 0x0000000000000000, 0x0000000000000000],
    [0x36baf85c136ed32b, 0x00000000000108f9, 0x0000000000000000],
    [0x27d6e2ab552795ca, 0x00003db1a69ca8e6, 0x0000000000000000],
    [0x668c8a86da5faf0c, 0x3ef282a242e818f1, 0x0000000000000e5d],
    [0x4ec1d3366b5893ba, 0x561bc629c7888f63, 0x00000015b5e355a9],
    [0x8a22ee0864f155c9, 0xc07b78a3e608686b, 0x000000099fd6d152],
    [0xb022f7992f550212, 0xc5cda4a23bec00de, 0x0000001344658af5],
    [0xd76deff63fd9c78e, 0xb14f7374113dbb14, 0x0000001b6bcc50ba],
    [0xda31e8617f0ca2f9, 0xe4e52edb0dce606c, 0x0000000daa5a494f],
    [0xa44b456954e76cd4, 0x82edb743efdaa6bf, 0x000000129a0f8e47],
    [0x6cb3864ab6089b01, 0x79c1493901b965ea, 0x00000010a669f98c],
    [0xa8dc70890c0855bf, 0xb377bf60a07dbdb7, 0x00000002e79aa238],
    [0x39034c451903b883, 0xe21fc500ac194dc9, 0x0000000d33a54cc0],
    [0x68836d7fef47ec7d, 0xbb83e3f22290d58c, 0x0000000f1b588bf0],
    [0x0f827793bd06cf94, 0xff7d3b9e1b0df3c4, 0x0000001a3f6126d5],
    [0xedcadb173da5f6b9, 0x1e633eebd5dd1a47, 0x0000001405e169ac],
    [0x3810ac57f0d8cf69, 0x83ceb2d0d9cf8e28, 0x0000000a45adf72e],
    [0x19663e44fc9ba0db, 0xcceea87c8f494dfd, 0x0000000ad480a18e],
    [0x08da4303f3d0538f, 0x60e6602216a58de6, 0x00000003722df61a],
    [0x7272ccf6680a6e1d, 0x7794ad2a026323ba, 0x0000000624483333],
    [0xabef6bbf085a45ec, 0x2a756ec1b0ba6c9a, 0x0000000bfbadcfb4],
    [0xc2dc9102a6772ddf, 0xeda41ca0145da786, 0x0000000c2553c4ab],
    [0xe261b29de2a39f2f, 0x9b942604bc2a63dc, 0x0000000a3a5470d5],
    [0xed26a0f28624656d, 0xdc36b2fd6dd8fd90, 0x00000013ee9e48a4],
    [0x31ce731dbde29407, 0x3e010fa627eaeb75, 0x00000008950a29eb],
    [0x017cea3f60511e47, 0x8b80431504c50406, 0x00000018f8222a2b],
    [0x1628a4c68608400f, 0x67acdc3543216c4e, 0x0000000a237ad6b1],
    [0xf2552d7c5ef9c359, 0x24451d09858a4fe8, 0x0000000b80c4308b],
    [0x3c98d53600a74beb, 0x326ab8fde50937f0, 0x00000002981889e3],
    [0x4cdf8fa6c95f3f5d, 0x027d3e294a9f3ce4, 0x000000171899329e],
    [0x4217b1cba75d7b8a, 0xbc162bb4e519e940, 0x00000006fcb80aa1],
    [0x965febc4ce75c4ee, 0x7a1b871e91efec61, 0x00000007dabedfd2],
    [0xe002a22421463adb, 0x0ca434f600e191b1, 0x000000133402e10d],
    [0xf157b6111e783d62, 0x1ffaa0f7a097b7b5, 0x0000000309cdbef6],
    [0xadfb8c852d43d664, 0xa9fcf7532907f628, 0x0000001b80cb3519],
    [0xb66cf2ef81887fba, 0x8da322e5bccdbbfd, 0x00000005f9b1cf4e],
    [0x4e9f5dc245e55263, 0xaa404510e6010b79, 0x000000124a23c8f0],
    [0xecf5311726dc0680, 0x27abefc2af25be83, 0x0000001a3b5c20eb],
    [0x569e5a8506210000, 0xc4aaadd0cb4d26c9, 0x00000018f2ef0afd],
    [0x0fdc41b00a000000, 0x5b9bd4c49caf7878, 0x0000001d485ee1ea],
    [0xe208ebe400000000, 0x4445d5f498f00a26, 0x00000018c36bf210],
    [0x7d49e80000000000, 0x2f36536a797eb616, 0x00000003c9920031],
    [0xe110000000000000, 0x95df4e0eb41525c9, 0x0000000b739ebb28],
    [0xa000000000000000, 0x8bf0ce86f2215f36, 0x000000097314a594],
    [0x0000000000000000, 0x59f1d41332dd5a40, 0x00000004c8ace4e1],
    [0x0000000000000000, 0xd19cc317b3b68000, 0x00000016aa97a852],
    [0x0000000000000000, 0x849ddf1701000000, 0x00000013486292a9],
    [0x0000000000000000, 0x1319c0ca00000000, 0x00000009aaaaec07],
    [0x0000000000000000, 0xd9a3640000000000, 0x00000001a5ae01fe],
    [0x0000000000000000, 0x14e8000000000000, 0x0000001d88dbac11],
    [0x0000000000000000, 0x1000000000000000, 0x00000003fa25860f],
    [0x0000000000000000, 0x0000000000000000, 0x0000000381cb82a0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x0000000000000014, 0x0000000000000000, 0x0000000000000000],
    [0x00000004720d6f50, 0x0000000000000000, 0x0000000000000000],
    [0x08f936baf85c136f, 0x0000000000000001, 0x0000000000000000],
    [0xa8e627d6e2ab5528, 0x000000003db1a69c, 0x0000000000000000],
    [0x18f1668c8a86da60, 0x0e5d3ef282a242e8, 0x0000000000000000],
    [0x8f634ec1d3366b59, 0x55a9561bc629c788, 0x0000000003582cef],
    [0x686b8a22ee0864f2, 0xd152c07b78a3e608, 0x00000019ec0f684d],
    [0x00deb022f7992f56, 0x8af5c5cda4a23bec, 0x000000121e4b654f],
    [0xbb14d76deff63fda, 0x50bab14f7374113d, 0x00000012851f0015],
    [0x606cda31e8617f0d, 0x494fe4e52edb0dce, 0x00000004f67e68df],
    [0xa6bfa44b456954e8, 0x8e4782edb743efda, 0x000000162f82b3a9],
    [0x65ea6cb3864ab609, 0xf98c79c1493901b9, 0x00000009aceadc75],
    [0xbdb7a8dc70890c09, 0xa238b377bf60a07d, 0x0000001b77d89579],
    [0x4dc939034c451904, 0x4cc0e21fc500ac19, 0x0000001c51eea179],
    [0xd58c68836d7fef48, 0x8bf0bb83e3f22290, 0x0000001c3e0856b5],
    [0xf3c40f827793bd07, 0x26d5ff7d3b9e1b0d, 0x0000000c77a0ea74],
    [0x1a47edcadb173da6, 0x69ac1e633eebd5dd, 0x0000001b0b2e5542],
    [0x8e283810ac57f0d9, 0xf72e83ceb2d0d9cf, 0x0000000f7682a3ec],
    [0x4dfd19663e44fc9c, 0xa18ecceea87c8f49, 0x000000195eda6566],
    [0x8de608da4303f3d1, 0xf61a60e6602216a5, 0x00000017e54a149c],
    [0x23ba7272ccf6680b, 0x33337794ad2a0263, 0x00000006be3afa64],
    [0x6c9aabef6bbf085b, 0xcfb42a756ec1b0ba, 0x000000175462b9eb],
    [0xa786c2dc9102a678, 0xc4abeda41ca0145d, 0x000000191a0e8a0e],
    [0x63dce261b29de2a4, 0x70d59b942604bc2a, 0x0000000370419661],
    [0xfd90ed26a0f28625, 0x48a4dc36b2fd6dd8, 0x00000016afebfe63],
    [0xeb7531ce731dbde3, 0x29eb3e010fa627ea, 0x000000171dc6093f],
    [0x0406017cea3f6052, 0x2a2b8b80431504c5, 0x0000000eb4da45e1],
    [0x6c4e1628a4c68609, 0xd6b167acdc354321, 0x000000169f78129e],
    [0x4fe8f2552d7c5efa, 0x308b24451d09858a, 0x000000072e205f05],
    [0x37f03c98d53600a8, 0x89e3326ab8fde509, 0x0000000135535d5d],
    [0x3ce44cdf8fa6c960, 0x329e027d3e294a9f, 0x00000015c7561e18],
    [0xe9404217b1cba75e, 0x0aa1bc162bb4e519, 0x00000005a24bf591],
    [0xec61965febc4ce76, 0xdfd27a1b871e91ef, 0x00000003f7c11e07],
    [0x91b1e002a2242147, 0xe10d0ca434f600e1, 0x00000001d5585d5d],
    [0xb7b5f157b6111e79, 0xbef61ffaa0f7a097, 0x00000015dba17757],
    [0xf628adfb8c852d44, 0x3519a9fcf7532907, 0x000000146e10d61c],
    [0xbbfdb66cf2ef8189, 0xcf4e8da322e5bccd, 0x00000006914b1d83],
    [0x0b794e9f5dc245e6, 0xc8f0aa404510e601, 0x00000000e314d179],
    [0xbe83ecf5311726dd, 0x20eb27abefc2af25, 0x0000001c5af27091],
    [0x26c9569e5a850621, 0x0afdc4aaadd0cb4d, 0x00000003fcf18394],
    [0x78780fdc41b00a00, 0xe1ea5b9bd4c49caf, 0x00000004aaa6e9a7],
    [0x0a26e208ebe40000, 0xf2104445d5f498f0, 0x00000009492e625a],
    [0xb6167d49e8000000, 0x00312f36536a797e, 0x000000152cc72086],
    [0x25c9e11000000000, 0xbb2895df4e0eb415, 0x0000000165ac2f9e],
    [0x5f36a00000000000, 0xa5948bf0ce86f221, 0x0000000727b730a2],
    [0x5a40000000000000, 0xe4e159f1d41332dd, 0x00000008111c2e43],
    [0x8000000000000000, 0xa852d19cc317b3b6, 0x0000000fcecd31e4],
    [0x0000000000000000, 0x92a9849ddf170100, 0x000000176fa7c4f2],
    [0x0000000000000000, 0xec071319c0ca0000, 0x0000001aad13b343],
    [0x0000000000000000, 0x01fed9a364000000, 0x0000000fd07735e6],
    [0x0000000000000000, 0xac1114e800000000, 0x00000017c0236d0a],
    [0x0000000000000000, 0x860f100000000000, 0x000000027c1bdddd],
    [0x0000000000000000, 0x82a0000000000000, 0x00000015c671e987],
    [0x0000000000000000, 0x4000000000000000, 0x00000001bfa56152],
    [0x0000000000000000, 0x0000000000000000, 0x00000013267b6680],
    [0x000000000004720e, 0x0000000000000000, 0x0000000000000000],
    [0x000108f936baf85d, 0x0000000000000000, 0x0000000000000000],
    [0xa69ca8e627d6e2ac, 0x0000000000003db1, 0x0000000000000000],
    [0x42e818f1668c8a87, 0x00000e5d3ef282a2, 0x0000000000000000],
    [0xc7888f634ec1d337, 0x2cef55a9561bc629, 0x0000000000000358],
    [0xe608686b8a22ee09, 0x684dd152c07b78a3, 0x0000001487abc42c],
    [0x3bec00deb022f79a, 0x654f8af5c5cda4a2, 0x0000000a56e3b85b],
    [0x113dbb14d76deff7, 0x001550bab14f7374, 0x00000015479c64d1],
    [0x0dce606cda31e862, 0x68df494fe4e52edb, 0x00000012dbfee07e],
    [0xefdaa6bfa44b456a, 0xb3a98e4782edb743, 0x0000001d6e9a4af7],
    [0x01b965ea6cb3864b, 0xdc75f98c79c14939, 0x0000001bdec89b8d],
    [0xa07dbdb7a8dc708a, 0x9579a238b377bf60, 0x000000033a30bf70],
    [0xac194dc939034c46, 0xa1794cc0e21fc500, 0x0000001a3685c980],
    [0x2290d58c68836d80, 0x56b58bf0bb83e3f2, 0x0000000025989712],
    [0x1b0df3c40f827794, 0xea7426d5ff7d3b9e, 0x00000004451278e1],
    [0xd5dd1a47edcadb18, 0x554269ac1e633eeb, 0x00000016cc3d11d2],
    [0xd9cf8e283810ac58, 0xa3ecf72e83ceb2d0, 0x000000132b6e8f94],
    [0x8f494dfd19663e45, 0x6566a18ecceea87c, 0x00000004ce4282dd],
    [0x16a58de608da4304, 0x149cf61a60e66022, 0x00000015bed758fc],
    [0x026323ba7272ccf7, 0xfa6433337794ad2a, 0x0000001ce3c67b67],
    [0xb0ba6c9aabef6bc0, 0xb9ebcfb42a756ec1, 0x000000183593c3a6],
    [0x145da786c2dc9103, 0x8a0ec4abeda41ca0, 0x000000090443bf6d],
    [0xbc2a63dce261b29e, 0x966170d59b942604, 0x00000019810ce325],
    [0x6dd8fd90ed26a0f3, 0xfe6348a4dc36b2fd, 0x00000008c0629447],
    [0x27eaeb7531ce731e, 0x093f29eb3e010fa6, 0x00000010c328b832],
    [0x04c50406017cea40, 0x45e12a2b8b804315, 0x0000000ba66299f4],
    [0x43216c4e1628a4c7, 0x129ed6b167acdc35, 0x0000001b1268ad4f],
    [0x858a4fe8f2552d7d, 0x5f05308b24451d09, 0x00000012691a33b9],
    [0xe50937f03c98d537, 0x5d5d89e3326ab8fd, 0x0000000d5b96a049],
    [0x4a9f3ce44cdf8fa7, 0x1e18329e027d3e29, 0x0000001114e09cb8],
    [0xe519e9404217b1cc, 0xf5910aa1bc162bb4, 0x0000000d10ddf5f7],
    [0x91efec61965febc5, 0x1e07dfd27a1b871e, 0x0000001bee20ce78],
    [0x00e191b1e002a225, 0x5d5de10d0ca434f6, 0x0000001bf78ca904],
    [0xa097b7b5f157b612, 0x7757bef61ffaa0f7, 0x0000000104283f03],
    [0x2907f628adfb8c86, 0xd61c3519a9fcf753, 0x00000000ce99bff6],
    [0xbccdbbfdb66cf2f0, 0x1d83cf4e8da322e5, 0x0000001bab331227],
    [0xe6010b794e9f5dc3, 0xd179c8f0aa404510, 0x000000091b73ff5b],
    [0xaf25be83ecf53118, 0x709120eb27abefc2, 0x0000001560cb87dc],
    [0xcb4d26c9569e5a86, 0x83940afdc4aaadd0, 0x0000001585d61ab6],
    [0x9caf78780fdc41b1, 0xe9a7e1ea5b9bd4c4, 0x0000000cb1494969],
    [0x98f00a26e208ebe4, 0x625af2104445d5f4, 0x00000018a8e3d26d],
    [0x797eb6167d49e800, 0x208600312f36536a, 0x0000001977ce701b],
    [0xb41525c9e1100000, 0x2f9ebb2895df4e0e, 0x0000000650e5da51],
    [0xf2215f36a0000000, 0x30a2a5948bf0ce86, 0x00000012e7104a32],
    [0x32dd5a4000000000, 0x2e43e4e159f1d413, 0x0000000baf8e5861],
    [0xb3b6800000000000, 0x31e4a852d19cc317, 0x00000016a06c2919],
    [0x0100000000000000, 0xc4f292a9849ddf17, 0x00000005ddbb97b6],
    [0x0000000000000000, 0xb343ec071319c0ca, 0x0000000cc0819920],
    [0x0000000000000000, 0x35e601fed9a36400, 0x000000079d164bb5],
    [0x0000000000000000, 0x6d0aac1114e80000, 0x0000000c63986b5a],
    [0x0000000000000000, 0xdddd860f10000000, 0x000000150dce681d],
    [0x0000000000000000, 0xe98782a000000000, 0x00000006f4311638],
    [0x0000000000000000, 0x6152400000000000, 0x0000000d403b9ee4],
    [0x0000000000000000, 0x6680000000000000, 0x000000175f1fb505],
    [0x0000000000000000, 0x0000000000000000, 0x0000000141e36be1],
    [0x0000000000000000, 0x0000000000000000, 0x0000001695a68a00],
    [0x0000000000000005, 0x0000000000000000, 0x0000000000000000],
    [0x0000000108f936bb, 0x0000000000000000, 0x0000000000000000],
    [0x3db1a69ca8e627d7, 0x0000000000000000, 0x0000000000000000],
    [0x82a242e818f1668d, 0x000000000e5d3ef2, 0x0000000000000000],
    [0xc629c7888f634ec2, 0x03582cef55a9561b, 0x0000000000000000],
    [0x78a3e608686b8a23, 0xc42c684dd152c07b, 0x0000000000c75809],
    [0xa4a23bec00deb023, 0xb85b654f8af5c5cd, 0x00000002461df38b],
    [0x7374113dbb14d76e, 0x64d1001550bab14f, 0x00000002ba9336cc],
    [0x2edb0dce606cda32, 0xe07e68df494fe4e5, 0x00000011c96d184b],
    [0xb743efdaa6bfa44c, 0x4af7b3a98e4782ed, 0x00000011aa9e0d5a],
    [0x493901b965ea6cb4, 0x9b8ddc75f98c79c1, 0x0000001505df6e91],
    [0xbf60a07dbdb7a8dd, 0xbf709579a238b377, 0x00000004197f29e3],
    [0xc500ac194dc93904, 0xc980a1794cc0e21f, 0x00000017396ed13b],
    [0xe3f22290d58c6884, 0x971256b58bf0bb83, 0x0000000deb970997],
    [0x3b9e1b0df3c40f83, 0x78e1ea7426d5ff7d, 0x000000057e14b838],
    [0x3eebd5dd1a47edcb, 0x11d2554269ac1e63, 0x0000000d26015852],
    [0xb2d0d9cf8e283811, 0x8f94a3ecf72e83ce, 0x000000131bbaf43d],
    [0xa87c8f494dfd1967, 0x82dd6566a18eccee, 0x0000000e5550347d],
    [0x602216a58de608db, 0x58fc149cf61a60e6, 0x0000001d390cc8d0],
    [0xad2a026323ba7273, 0x7b67fa6433337794, 0x00000012b517069b],
    [0x6ec1b0ba6c9aabf0, 0xc3a6b9ebcfb42a75, 0x00000006660ee2a1],
    [0x1ca0145da786c2dd, 0xbf6d8a0ec4abeda4, 0x00000007dc81c386],
    [0x2604bc2a63dce262, 0xe325966170d59b94, 0x000000019232b9c2],
    [0xb2fd6dd8fd90ed27, 0x9447fe6348a4dc36, 0x0000000f92cb1580],
    [0x0fa627eaeb7531cf, 0xb832093f29eb3e01, 0x0000000022863ff0],
    [0x431504c50406017d, 0x99f445e12a2b8b80, 0x0000001a3e9b4792],
    [0xdc3543216c4e1629, 0xad4f129ed6b167ac, 0x0000000454ba9687],
    [0x1d09858a4fe8f256, 0x33b95f05308b2445, 0x00000001c995899c],
    [0xb8fde50937f03c99, 0xa0495d5d89e3326a, 0x0000000690f91739],
    [0x3e294a9f3ce44ce0, 0x9cb81e18329e027d, 0x0000000d6ac8cd20],
    [0x2bb4e519e9404218, 0xf5f7f5910aa1bc16, 0x0000000797d6715a],
    [0x871e91efec619660, 0xce781e07dfd27a1b, 0x000000152dafe2d7],
    [0x34f600e191b1e003, 0xa9045d5de10d0ca4, 0x0000001471ad2c18],
    [0xa0f7a097b7b5f158, 0x3f037757bef61ffa, 0x00000005bddd2382],
    [0xf7532907f628adfc, 0xbff6d61c3519a9fc, 0x0000000085e17a4f],
    [0x22e5bccdbbfdb66d, 0x12271d83cf4e8da3, 0x0000001291764b4e],
    [0x4510e6010b794ea0, 0xff5bd179c8f0aa40, 0x000000122d6389a7],
    [0xefc2af25be83ecf6, 0x87dc709120eb27ab, 0x0000000950095601],
    [0xadd0cb4d26c9569f, 0x1ab683940afdc4aa, 0x000000005b3cbdc1],
    [0xd4c49caf78780fdd, 0x4969e9a7e1ea5b9b, 0x0000000f28858132],
    [0xd5f498f00a26e209, 0xd26d625af2104445, 0x0000000bb553407d],
    [0x536a797eb6167d4a, 0x701b208600312f36, 0x0000001d4b931382],
    [0x4e0eb41525c9e110, 0xda512f9ebb2895df, 0x00000000914f9d45],
    [0xce86f2215f36a000, 0x4a3230a2a5948bf0, 0x00000010438d2914],
    [0xd41332dd5a400000, 0x58612e43e4e159f1, 0x00000004b95e35f2],
    [0xc317b3b680000000, 0x291931e4a852d19c, 0x0000001a9f81c9dc],
    [0xdf17010000000000, 0x97b6c4f292a9849d, 0x0000001575324015],
    [0xc0ca000000000000, 0x9920b343ec071319, 0x0000000507056d0c],
    [0x6400000000000000, 0x4bb535e601fed9a3, 0x00000002eee897d0],
    [0x0000000000000000, 0x6b5a6d0aac1114e8, 0x00000012b1ffaa2b],
    [0x0000000000000000, 0x681ddddd860f1000, 0x0000000a1bfeae3c],
    [0x0000000000000000, 0x1638e98782a00000, 0x0000000e10852e41],
    [0x0000000000000000, 0x9ee4615240000000, 0x0000000f2779d797],
    [0x0000000000000000, 0xb505668000000000, 0x000000057fe6db30],
    [0x0000000000000000, 0x6be1000000000000, 0x0000000b572b92b5],
    [0x0000000000000000, 0x8a00000000000000, 0x0000000c7029e779],
    [0x0000000000000000, 0x0000000000000000, 0x0000001c4c4aeae4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x00000000000108fa, 0x0000000000000000, 0x0000000000000000],
    [0x00003db1a69ca8e7, 0x0000000000000000, 0x0000000000000000],
    [0x3ef282a242e818f2, 0x0000000000000e5d, 0x0000000000000000],
    [0x561bc629c7888f64, 0x000003582cef55a9, 0x0000000000000000],
    [0xc07b78a3e608686c, 0x5809c42c684dd152, 0x00000000000000c7],
    [0xc5cda4a23bec00df, 0xf38bb85b654f8af5, 0x000000109c6d818d],
    [0xb14f7374113dbb15, 0x36cc64d1001550ba, 0x000000033f90b7b6],
    [0xe4e52edb0dce606d, 0x184be07e68df494f, 0x0000000c9f68d96e],
    [0x82edb743efdaa6c0, 0x0d5a4af7b3a98e47, 0x00000019a22af98e],
    [0x79c1493901b965eb, 0x6e919b8ddc75f98c, 0x000000034592ee21],
    [0xb377bf60a07dbdb8, 0x29e3bf709579a238, 0x00000007c8b273b0],
    [0xe21fc500ac194dca, 0xd13bc980a1794cc0, 0x0000000b36c6b12d],
    [0xbb83e3f22290d58d, 0x0997971256b58bf0, 0x0000000aaaeccc81],
    [0xff7d3b9e1b0df3c5, 0xb83878e1ea7426d5, 0x000000003dd68693],
    [0x1e633eebd5dd1a48, 0x585211d2554269ac, 0x0000000497616531],
    [0x83ceb2d0d9cf8e29, 0xf43d8f94a3ecf72e, 0x0000000b7d30fb2a],
    [0xcceea87c8f494dfe, 0x347d82dd6566a18e, 0x0000000a004301d8],
    [0x60e6602216a58de7, 0xc8d058fc149cf61a, 0x00000014896e1a14],
    [0x7794ad2a026323bb, 0x069b7b67fa643333, 0x00000004d6d9384c],
    [0x2a756ec1b0ba6c9b, 0xe2a1c3a6b9ebcfb4, 0x00000011b37dcc2f],
    [0xeda41ca0145da787, 0xc386bf6d8a0ec4ab, 0x0000000b262f663a],
    [0x9b942604bc2a63dd, 0xb9c2e325966170d5, 0x0000000dae980b75],
    [0xdc36b2fd6dd8fd91, 0x15809447fe6348a4, 0x0000001b68fe8e2a],
    [0x3e010fa627eaeb76, 0x3ff0b832093f29eb, 0x00000009cc66c67d],
    [0x8b80431504c50407, 0x479299f445e12a2b, 0x0000001d2977c5b6],
    [0x67acdc3543216c4f, 0x9687ad4f129ed6b1, 0x0000000ca350ac25],
    [0x24451d09858a4fe9, 0x899c33b95f05308b, 0x00000008c06b7b56],
    [0x326ab8fde50937f1, 0x1739a0495d5d89e3, 0x00000014260a1078],
    [0x027d3e294a9f3ce5, 0xcd209cb81e18329e, 0x0000001bf5f702ee],
    [0xbc162bb4e519e941, 0x715af5f7f5910aa1, 0x00000019cc455798],
    [0x7a1b871e91efec62, 0xe2d7ce781e07dfd2, 0x00000005b0e770d9],
    [0x0ca434f600e191b2, 0x2c18a9045d5de10d, 0x00000014eda11f66],
    [0x1ffaa0f7a097b7b6, 0x23823f037757bef6, 0x00000017c9f0d495],
    [0xa9fcf7532907f629, 0x7a4fbff6d61c3519, 0x00000004ebf70ee4],
    [0x8da322e5bccdbbfe, 0x4b4e12271d83cf4e, 0x0000001764f13dba],
    [0xaa404510e6010b7a, 0x89a7ff5bd179c8f0, 0x0000000d929a4a91],
    [0x27abefc2af25be84, 0x560187dc709120eb, 0x0000000415545d88],
    [0xc4aaadd0cb4d26ca, 0xbdc11ab683940afd, 0x00000001f0dcab18],
    [0x5b9bd4c49caf7879, 0x81324969e9a7e1ea, 0x00000005c2b12d0c],
    [0x4445d5f498f00a27, 0x407dd26d625af210, 0x00000002e9562d1d],
    [0x2f36536a797eb617, 0x1382701b20860031, 0x00000006cf8ce013],
    [0x95df4e0eb41525ca, 0x9d45da512f9ebb28, 0x000000047107d9b2],
    [0x8bf0ce86f2215f37, 0x29144a3230a2a594, 0x0000000bc8d9a56f],
    [0x59f1d41332dd5a40, 0x35f258612e43e4e1, 0x00000019e1ae19b8],
    [0xd19cc317b3b68000, 0xc9dc291931e4a852, 0x0000000d166ba8b8],
    [0x849ddf1701000000, 0x401597b6c4f292a9, 0x0000000d38dbfb31],
    [0x1319c0ca00000000, 0x6d0c9920b343ec07, 0x0000000b778c6385],
    [0xd9a3640000000000, 0x97d04bb535e601fe, 0x000000014369c8ea],
    [0x14e8000000000000, 0xaa2b6b5a6d0aac11, 0x00000018d170708a],
    [0x1000000000000000, 0xae3c681ddddd860f, 0x000000027baaca22],
    [0x0000000000000000, 0x2e411638e98782a0, 0x00000008132019d1],
    [0x0000000000000000, 0xd7979ee461524000, 0x00000012e6bee1c5],
    [0x0000000000000000, 0xdb30b50566800000, 0x0000001042eabef1],
    [0x0000000000000000, 0x92b56be100000000, 0x0000001a825bebf9],
    [0x0000000000000000, 0xe7798a0000000000, 0x0000001c4e51fec2],
    [0x0000000000000000, 0xeae4000000000000, 0x0000000f93cd0c90],
    [0x0000000000000000, 0xe800000000000000, 0x00000003f05d327f],
    [0x0000000000000000, 0x0000000000000000, 0x0000001dc7ce7d10],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x0000000000000002, 0x0000000000000000, 0x0000000000000000],
    [0x000000003db1a69d, 0x0000000000000000, 0x0000000000000000],
    [0x0e5d3ef282a242e9, 0x0000000000000000, 0x0000000000000000],
    [0x55a9561bc629c789, 0x0000000003582cef, 0x0000000000000000],
    [0xd152c07b78a3e609, 0x00c75809c42c684d, 0x0000000000000000],
    [0x8af5c5cda4a23bed, 0x818df38bb85b654f, 0x00000000002e69d2],
    [0x50bab14f7374113e, 0xb7b636cc64d10015, 0x0000001335bec0bf],
    [0x494fe4e52edb0dcf, 0xd96e184be07e68df, 0x0000000ed5ddc933],
    [0x8e4782edb743efdb, 0xf98e0d5a4af7b3a9, 0x0000000c12761564],
    [0xf98c79c1493901ba, 0xee216e919b8ddc75, 0x0000001782918971],
    [0xa238b377bf60a07e, 0x73b029e3bf709579, 0x0000001a86c4da7e],
    [0x4cc0e21fc500ac1a, 0xb12dd13bc980a179, 0x0000001d711ef8e9],
    [0x8bf0bb83e3f22291, 0xcc810997971256b5, 0x000000189bbd8a96],
    [0x26d5ff7d3b9e1b0e, 0x8693b83878e1ea74, 0x000000054eeac033],
    [0x69ac1e633eebd5de, 0x6531585211d25542, 0x0000000bff2ba882],
    [0xf72e83ceb2d0d9d0, 0xfb2af43d8f94a3ec, 0x000000008ec522e2],
    [0xa18ecceea87c8f4a, 0x01d8347d82dd6566, 0x000000170bbc1851],
    [0xf61a60e6602216a6, 0x1a14c8d058fc149c, 0x00000012dc67db9d],
    [0x33337794ad2a0264, 0x384c069b7b67fa64, 0x00000006c69b715d],
    [0xcfb42a756ec1b0bb, 0xcc2fe2a1c3a6b9eb, 0x00000015b456f1ad],
    [0xc4abeda41ca0145e, 0x663ac386bf6d8a0e, 0x0000000aa9c00127],
    [0x70d59b942604bc2b, 0x0b75b9c2e3259661, 0x000000092c622114],
    [0x48a4dc36b2fd6dd9, 0x8e2a15809447fe63, 0x00000004aac2d7ac],
    [0x29eb3e010fa627eb, 0xc67d3ff0b832093f, 0x0000000a5fb46072],
    [0x2a2b8b80431504c6, 0xc5b6479299f445e1, 0x0000001ab924d5b3],
    [0xd6b167acdc354322, 0xac259687ad4f129e, 0x0000000c0ddecc27],
    [0x308b24451d09858b, 0x7b56899c33b95f05, 0x000000093ca98623],
    [0x89e3326ab8fde50a, 0x10781739a0495d5d, 0x0000000842e12318],
    [0x329e027d3e294aa0, 0x02eecd209cb81e18, 0x000000059a589297],
    [0x0aa1bc162bb4e51a, 0x5798715af5f7f591, 0x000000055b96f53e],
    [0xdfd27a1b871e91f0, 0x70d9e2d7ce781e07, 0x0000000e83e204f2],
    [0xe10d0ca434f600e2, 0x1f662c18a9045d5d, 0x0000001aa5346766],
    [0xbef61ffaa0f7a098, 0xd49523823f037757, 0x00000017c6fc0466],
    [0x3519a9fcf7532908, 0x0ee47a4fbff6d61c, 0x00000017f12b64a4],
    [0xcf4e8da322e5bcce, 0x3dba4b4e12271d83, 0x00000008653c1162],
    [0xc8f0aa404510e602, 0x4a9189a7ff5bd179, 0x00000016dfa09621],
    [0x20eb27abefc2af26, 0x5d88560187dc7091, 0x00000007c050ab1d],
    [0x0afdc4aaadd0cb4e, 0xab18bdc11ab68394, 0x00000006d64fdba3],
    [0xe1ea5b9bd4c49cb0, 0x2d0c81324969e9a7, 0x000000084dffc59f],
    [0xf2104445d5f498f1, 0x2d1d407dd26d625a, 0x00000007423b94d8],
    [0x00312f36536a797f, 0xe0131382701b2086, 0x0000001487b6750e],
    [0xbb2895df4e0eb416, 0xd9b29d45da512f9e, 0x0000000376a2edc7],
    [0xa5948bf0ce86f222, 0xa56f29144a3230a2, 0x00000010ba9dd178],
    [0xe4e159f1d41332de, 0x19b835f258612e43, 0x0000001c171355e0],
    [0xa852d19cc317b3b7, 0xa8b8c9dc291931e4, 0x000000166008c18a],
    [0x92a9849ddf170100, 0xfb31401597b6c4f2, 0x000000027b547ed0],
    [0xec071319c0ca0000, 0x63856d0c9920b343, 0x00000012dadb5b9a],
    [0x01fed9a364000000, 0xc8ea97d04bb535e6, 0x0000000624e470ec],
    [0xac1114e800000000, 0x708aaa2b6b5a6d0a, 0x000000195414c4a5],
    [0x860f100000000000, 0xca22ae3c681ddddd, 0x00000008b793336f],
    [0x82a0000000000000, 0x19d12e411638e987, 0x0000001a072dcc84],
    [0x4000000000000000, 0xe1c5d7979ee46152, 0x00000000f46df9dd],
    [0x0000000000000000, 0xbef1db30b5056680, 0x00000015dbcc7dd9],
    [0x0000000000000000, 0xebf992b56be10000, 0x00000014e5456bac],
    [0x0000000000000000, 0xfec2e7798a000000, 0x0000000a758beb24],
    [0x0000000000000000, 0x0c90eae400000000, 0x000000089d155d9e],
    [0x0000000000000000, 0x327fe80000000000, 0x00000006ff10ab3a],
    [0x0000000000000000, 0x7d10000000000000, 0x0000000d8cd3c742],
    [0x0000000000000000, 0xa000000000000000, 0x0000000f7b06624e],
    [0x0000000000000000, 0x0000000000000000, 0x000000124e6a4a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x0000000000003db2, 0x0000000000000000, 0x0000000000000000],
    [0x00000e5d3ef282a3, 0x0000000000000000, 0x0000000000000000],
    [0x2cef55a9561bc62a, 0x0000000000000358, 0x0000000000000000],
    [0x684dd152c07b78a4, 0x000000c75809c42c, 0x0000000000000000],
    [0x654f8af5c5cda4a3, 0x69d2818df38bb85b, 0x000000000000002e],
    [0x001550bab14f7375, 0xc0bfb7b636cc64d1, 0x0000000ace73cbfd],
    [0x68df494fe4e52edc, 0xc933d96e184be07e, 0x0000001d47755cc2],
    [0xb3a98e4782edb744, 0x1564f98e0d5a4af7, 0x0000000f8cc0af10],
    [0xdc75f98c79c1493a, 0x8971ee216e919b8d, 0x00000003bea7d523],
    [0x9579a238b377bf61, 0xda7e73b029e3bf70, 0x000000084629fade],
    [0xa1794cc0e21fc501, 0xf8e9b12dd13bc980, 0x0000001615b56d22],
    [0x56b58bf0bb83e3f3, 0x8a96cc8109979712, 0x00000008248330d2],
    [0xea7426d5ff7d3b9f, 0xc0338693b83878e1, 0x0000001337d94133],
    [0x554269ac1e633eec, 0xa8826531585211d2, 0x0000000c0c9654ab],
    [0xa3ecf72e83ceb2d1, 0x22e2fb2af43d8f94, 0x0000000a2a3bdeba],
    [0x6566a18ecceea87d, 0x185101d8347d82dd, 0x0000000d89312bf5],
    [0x149cf61a60e66023, 0xdb9d1a14c8d058fc, 0x0000001b4367b157],
    [0xfa6433337794ad2b, 0x715d384c069b7b67, 0x0000001474bca4ce],
    [0xb9ebcfb42a756ec2, 0xf1adcc2fe2a1c3a6, 0x00000012438e9380],
    [0x8a0ec4abeda41ca1, 0x0127663ac386bf6d, 0x0000000038452f4f],
    [0x966170d59b942605, 0x21140b75b9c2e325, 0x0000001265091d2c],
    [0xfe6348a4dc36b2fe, 0xd7ac8e2a15809447, 0x0000000a464e56cc],
    [0x093f29eb3e010fa7, 0x6072c67d3ff0b832, 0x00000011e42b24bf],
    [0x45e12a2b8b804316, 0xd5b3c5b6479299f4, 0x0000000ec18c7ae4],
    [0x129ed6b167acdc36, 0xcc27ac259687ad4f, 0x000000177a388d55],
    [0x5f05308b24451d0a, 0x86237b56899c33b9, 0x00000013f9eda7a1],
    [0x5d5d89e3326ab8fe, 0x231810781739a049, 0x00000007ce2f529d],
    [0x1e18329e027d3e2a, 0x929702eecd209cb8, 0x00000006c8b4a5f6],
    [0xf5910aa1bc162bb5, 0xf53e5798715af5f7, 0x0000001b9b7a8c2f],
    [0x1e07dfd27a1b871f, 0x04f270d9e2d7ce78, 0x0000000b2a84bd34],
    [0x5d5de10d0ca434f7, 0x67661f662c18a904, 0x0000000c1c97e5c1],
    [0x7757bef61ffaa0f8, 0x0466d49523823f03, 0x0000000f3a605842],
    [0xd61c3519a9fcf754, 0x64a40ee47a4fbff6, 0x0000000f5eee7053],
    [0x1d83cf4e8da322e6, 0x11623dba4b4e1227, 0x000000136a9e2789],
    [0xd179c8f0aa404511, 0x96214a9189a7ff5b, 0x000000021c7d410a],
    [0x709120eb27abefc3, 0xab1d5d88560187dc, 0x00000002770056ac],
    [0x83940afdc4aaadd1, 0xdba3ab18bdc11ab6, 0x0000000a6671f33d],
    [0xe9a7e1ea5b9bd4c5, 0xc59f2d0c81324969, 0x0000000e6705a832],
    [0x625af2104445d5f5, 0x94d82d1d407dd26d, 0x0000000bd23ea112],
    [0x208600312f36536b, 0x750ee0131382701b, 0x00000004538a05e3],
    [0x2f9ebb2895df4e0f, 0xedc7d9b29d45da51, 0x00000017281d52f4],
    [0x30a2a5948bf0ce87, 0xd178a56f29144a32, 0x0000001b39805d04],
    [0x2e43e4e159f1d414, 0x55e019b835f25861, 0x000000011f309dfd],
    [0x31e4a852d19cc318, 0xc18aa8b8c9dc2919, 0x0000001d2e93347f],
    [0xc4f292a9849ddf18, 0x7ed0fb31401597b6, 0x0000001dbeda3103],
    [0xb343ec071319c0ca, 0x5b9a63856d0c9920, 0x00000000d05735ac],
    [0x35e601fed9a36400, 0x70ecc8ea97d04bb5, 0x0000000a53eeb017],
    [0x6d0aac1114e80000, 0xc4a5708aaa2b6b5a, 0x000000057532ffd9],
    [0xdddd860f10000000, 0x336fca22ae3c681d, 0x00000014e69941a0],
    [0xe98782a000000000, 0xcc8419d12e411638, 0x000000077f531d6b],
    [0x6152400000000000, 0xf9dde1c5d7979ee4, 0x00000019195088ca],
    [0x6680000000000000, 0x7dd9bef1db30b505, 0x0000001174eb9bab],
    [0x0000000000000000, 0x6bacebf992b56be1, 0x0000000a204d354c],
    [0x0000000000000000, 0xeb24fec2e7798a00, 0x00000011cb05ed5e],
    [0x0000000000000000, 0x5d9e0c90eae40000, 0x000000161995e083],
    [0x0000000000000000, 0xab3a327fe8000000, 0x00000000c89c65d7],
    [0x0000000000000000, 0xc7427d1000000000, 0x00000014697897c1],
    [0x0000000000000000, 0x624ea00000000000, 0x0000000f50b2180c],
    [0x0000000000000000, 0x4a40000000000000, 0x00000002e22507be],
    [0x0000000000000000, 0x8000000000000000, 0x0000000e80c69116],
    [0x0000000000000000, 0x0000000000000000, 0x000000053d1ac100],
    [0x000000000e5d3ef3, 0x0000000000000000, 0x0000000000000000],
    [0x03582cef55a9561c, 0x0000000000000000, 0x0000000000000000],
    [0xc42c684dd152c07c, 0x0000000000c75809, 0x0000000000000000],
    [0xb85b654f8af5c5ce, 0x002e69d2818df38b, 0x0000000000000000],
    [0x64d1001550bab150, 0xcbfdc0bfb7b636cc, 0x00000000000ace73],
    [0xe07e68df494fe4e6, 0x5cc2c933d96e184b, 0x0000001af6079108],
    [0x4af7b3a98e4782ee, 0xaf101564f98e0d5a, 0x00000001f26f4abd],
    [0x9b8ddc75f98c79c2, 0xd5238971ee216e91, 0x0000000e5ca4b0bd],
    [0xbf709579a238b378, 0xfadeda7e73b029e3, 0x0000000e6582323b],
    [0xc980a1794cc0e220, 0x6d22f8e9b12dd13b, 0x0000000df7159a5e],
    [0x971256b58bf0bb84, 0x30d28a96cc810997, 0x00000015fc3f3885],
    [0x78e1ea7426d5ff7e, 0x4133c0338693b838, 0x000000013563fd1e],
    [0x11d2554269ac1e64, 0x54aba88265315852, 0x000000070b5205e0],
    [0x8f94a3ecf72e83cf, 0xdeba22e2fb2af43d, 0x000000166dc281e8],
    [0x82dd6566a18eccef, 0x2bf5185101d8347d, 0x000000186abda1c2],
    [0x58fc149cf61a60e7, 0xb157db9d1a14c8d0, 0x0000000f682424ba],
    [0x7b67fa6433337795, 0xa4ce715d384c069b, 0x0000000daa5c3e66],
    [0xc3a6b9ebcfb42a76, 0x9380f1adcc2fe2a1, 0x00000017e60bb65b],
    [0xbf6d8a0ec4abeda5, 0x2f4f0127663ac386, 0x00000015525db5a8],
    [0xe325966170d59b95, 0x1d2c21140b75b9c2, 0x000000095b33601f],
    [0x9447fe6348a4dc37, 0x56ccd7ac8e2a1580, 0x000000073e894530],
    [0xb832093f29eb3e02, 0x24bf6072c67d3ff0, 0x0000000b413b916c],
    [0x99f445e12a2b8b81, 0x7ae4d5b3c5b64792, 0x000000192ddb8b59],
    [0xad4f129ed6b167ad, 0x8d55cc27ac259687, 0x00000014d56d45e1],
    [0x33b95f05308b2446, 0xa7a186237b56899c, 0x00000016b68ec52f],
    [0xa0495d5d89e3326b, 0x529d231810781739, 0x0000000b1872ab5a],
    [0x9cb81e18329e027e, 0xa5f6929702eecd20, 0x0000001507a72ecd],
    [0xf5f7f5910aa1bc17, 0x8c2ff53e5798715a, 0x000000121432ef11],
    [0xce781e07dfd27a1c, 0xbd3404f270d9e2d7, 0x0000000415eb3afc],
    [0xa9045d5de10d0ca5, 0xe5c167661f662c18, 0x0000001d0b073bb9],
    [0x3f037757bef61ffb, 0x58420466d4952382, 0x0000000d7af57877],
    [0xbff6d61c3519a9fd, 0x705364a40ee47a4f, 0x0000001bc9807a5e],
    [0x12271d83cf4e8da4, 0x278911623dba4b4e, 0x00000015fcfd4efe],
    [0xff5bd179c8f0aa41, 0x410a96214a9189a7, 0x0000001d5f63eaa8],
    [0x87dc709120eb27ac, 0x56acab1d5d885601, 0x000000095f54544a],
    [0x1ab683940afdc4ab, 0xf33ddba3ab18bdc1, 0x000000114eec97b2],
    [0x4969e9a7e1ea5b9c, 0xa832c59f2d0c8132, 0x0000000bdcddc8c3],
    [0xd26d625af2104446, 0xa11294d82d1d407d, 0x0000000fc0ac44ce],
    [0x701b208600312f37, 0x05e3750ee0131382, 0x000000124eaa3894],
    [0xda512f9ebb2895e0, 0x52f4edc7d9b29d45, 0x00000004a976c374],
    [0x4a3230a2a5948bf1, 0x5d04d178a56f2914, 0x0000001b15742399],
    [0x58612e43e4e159f2, 0x9dfd55e019b835f2, 0x00000005e7c61492],
    [0x291931e4a852d19d, 0x347fc18aa8b8c9dc, 0x0000000455ab1dda],
    [0x97b6c4f292a9849e, 0x31037ed0fb314015, 0x0000001500a433e2],
    [0x9920b343ec07131a, 0x35ac5b9a63856d0c, 0x00000016dcaac501],
    [0x4bb535e601fed9a4, 0xb01770ecc8ea97d0, 0x000000004819f725],
    [0x6b5a6d0aac1114e8, 0xffd9c4a5708aaa2b, 0x00000008c65f1212],
    [0x681ddddd860f1000, 0x41a0336fca22ae3c, 0x000000046c741734],
    [0x1638e98782a00000, 0x1d6bcc8419d12e41, 0x0000000c2ab8a202],
    [0x9ee4615240000000, 0x88caf9dde1c5d797, 0x000000007e0f3632],
    [0xb505668000000000, 0x9bab7dd9bef1db30, 0x0000000bc414f1a0],
    [0x6be1000000000000, 0x354c6bacebf992b5, 0x000000079797e600],
    [0x8a00000000000000, 0xed5eeb24fec2e779, 0x000000000c68d6d7],
    [0x0000000000000000, 0xe0835d9e0c90eae4, 0x0000001478df0c97],
    [0x0000000000000000, 0x65d7ab3a327fe800, 0x000000058f2e2cc1],
    [0x0000000000000000, 0x97c1c7427d100000, 0x0000000f3a03928f],
    [0x0000000000000000, 0x180c624ea0000000, 0x00000003a167413d],
    [0x0000000000000000, 0x07be4a4000000000, 0x0000000e397b8715],
    [0x0000000000000000, 0x9116800000000000, 0x00000004e5801bb1],
    [0x0000000000000000, 0xc100000000000000, 0x0000000b8a689384],
    [0x0000000000000000, 0x0000000000000000, 0x000000011b5ada4a],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x0000000000000e5e, 0x0000000000000000, 0x0000000000000000],
    [0x000003582cef55aa, 0x0000000000000000, 0x0000000000000000],
    [0x5809c42c684dd153, 0x00000000000000c7, 0x0000000000000000],
    [0xf38bb85b654f8af6, 0x0000002e69d2818d, 0x0000000000000000],
    [0x36cc64d1001550bb, 0xce73cbfdc0bfb7b6, 0x000000000000000a],
    [0x184be07e68df4950, 0x91085cc2c933d96e, 0x00000002841d6893],
    [0x0d5a4af7b3a98e48, 0x4abdaf101564f98e, 0x000000048e419cd9],
    [0x6e919b8ddc75f98d, 0xb0bdd5238971ee21, 0x00000014ca37226d],
    [0x29e3bf709579a239, 0x323bfadeda7e73b0, 0x000000198a0e9fc7],
    [0xd13bc980a1794cc1, 0x9a5e6d22f8e9b12d, 0x0000001093a03889],
    [0x0997971256b58bf1, 0x388530d28a96cc81, 0x000000023c6233c3],
    [0xb83878e1ea7426d6, 0xfd1e4133c0338693, 0x0000000fa6abbcf8],
    [0x585211d2554269ad, 0x05e054aba8826531, 0x0000001c2b7db4f4],
    [0xf43d8f94a3ecf72f, 0x81e8deba22e2fb2a, 0x0000001b0381c919],
    [0x347d82dd6566a18f, 0xa1c22bf5185101d8, 0x00000005f05cf1ec],
    [0xc8d058fc149cf61b, 0x24bab157db9d1a14, 0x000000194af6c693],
    [0x069b7b67fa643334, 0x3e66a4ce715d384c, 0x00000004750a3a29],
    [0xe2a1c3a6b9ebcfb5, 0xb65b9380f1adcc2f, 0x000000099a51bcf7],
    [0xc386bf6d8a0ec4ac, 0xb5a82f4f0127663a, 0x0000001bdf6943f9],
    [0xb9c2e325966170d6, 0x601f1d2c21140b75, 0x0000001c5675136a],
    [0x15809447fe6348a5, 0x453056ccd7ac8e2a, 0x00000018c478ee49],
    [0x3ff0b832093f29ec, 0x916c24bf6072c67d, 0x000000110f3f93ad],
    [0x479299f445e12a2c, 0x8b597ae4d5b3c5b6, 0x0000000a9c115c45],
    [0x9687ad4f129ed6b2, 0x45e18d55cc27ac25, 0x00000010312a531b],
    [0x899c33b95f05308c, 0xc52fa7a186237b56, 0x0000000659988a65],
    [0x1739a0495d5d89e4, 0xab5a529d23181078, 0x00000017b1fae7e4],
    [0xcd209cb81e18329f, 0x2ecda5f6929702ee, 0x00000017705c5495],
    [0x715af5f7f5910aa2, 0xef118c2ff53e5798, 0x00000004ee9843e3],
    [0xe2d7ce781e07dfd3, 0x3afcbd3404f270d9, 0x000000174485b681],
    [0x2c18a9045d5de10e, 0x3bb9e5c167661f66, 0x000000004956b430],
    [0x23823f037757bef7, 0x787758420466d495, 0x0000000b3aedd4e8],
    [0x7a4fbff6d61c351a, 0x7a5e705364a40ee4, 0x0000001852ee6830],
    [0x4b4e12271d83cf4f, 0x4efe278911623dba, 0x0000000b4983a141],
    [0x89a7ff5bd179c8f1, 0xeaa8410a96214a91, 0x0000000f34b1a054],
    [0x560187dc709120ec, 0x544a56acab1d5d88, 0x00000013c56cf15d],
    [0xbdc11ab683940afe, 0x97b2f33ddba3ab18, 0x00000015badb7b34],
    [0x81324969e9a7e1eb, 0xc8c3a832c59f2d0c, 0x0000000c3ec2ff68],
    [0x407dd26d625af211, 0x44cea11294d82d1d, 0x0000001865a08be1],
    [0x1382701b20860032, 0x389405e3750ee013, 0x00000016a5abc3b7],
    [0x9d45da512f9ebb29, 0xc37452f4edc7d9b2, 0x0000000cdb6db90b],
    [0x29144a3230a2a595, 0x23995d04d178a56f, 0x00000002bd28ab52],
    [0x35f258612e43e4e2, 0x14929dfd55e019b8, 0x000000131fde92c9],
    [0xc9dc291931e4a853, 0x1dda347fc18aa8b8, 0x0000001103edd4d8],
    [0x401597b6c4f292aa, 0x33e231037ed0fb31, 0x000000148428c6eb],
    [0x6d0c9920b343ec08, 0xc50135ac5b9a6385, 0x00000018f5c6ee4d],
    [0x97d04bb535e601ff, 0xf725b01770ecc8ea, 0x000000121b6d278b],
    [0xaa2b6b5a6d0aac12, 0x1212ffd9c4a5708a, 0x00000002c931cd45],
    [0xae3c681ddddd8610, 0x173441a0336fca22, 0x0000001014edc0a8],
    [0x2e411638e98782a0, 0xa2021d6bcc8419d1, 0x000000095596a2de],
    [0xd7979ee461524000, 0x363288caf9dde1c5, 0x00000016088e9de3],
    [0xdb30b50566800000, 0xf1a09bab7dd9bef1, 0x00000017197a88b0],
    [0x92b56be100000000, 0xe600354c6bacebf9, 0x0000000b6547fd26],
    [0xe7798a0000000000, 0xd6d7ed5eeb24fec2, 0x000000090e8719e4],
    [0xeae4000000000000, 0x0c97e0835d9e0c90, 0x000000177a7c9320],
    [0xe800000000000000, 0x2cc165d7ab3a327f, 0x000000077647de0b],
    [0x0000000000000000, 0x928f97c1c7427d10, 0x000000029a125020],
    [0x0000000000000000, 0x413d180c624ea000, 0x000000079578f600],
    [0x0000000000000000, 0x871507be4a400000, 0x000000000f3086c5],
    [0x0000000000000000, 0x1bb1911680000000, 0x00000010302bf806],
    [0x0000000000000000, 0x9384c10000000000, 0x000000016c13671b],
    [0x0000000000000000, 0xda4a000000000000, 0x000000066bac18bd],
    [0x0000000000000000, 0x6400000000000000, 0x0000000e66b52cc2],
    [0x0000000000000000, 0x0000000000000000, 0x0000000f75308ae8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x0000000003582cf0, 0x0000000000000000, 0x0000000000000000],
    [0x00c75809c42c684e, 0x0000000000000000, 0x0000000000000000],
    [0x818df38bb85b6550, 0x00000000002e69d2, 0x0000000000000000],
    [0xb7b636cc64d10016, 0x000ace73cbfdc0bf, 0x0000000000000000],
    [0xd96e184be07e68e0, 0x689391085cc2c933, 0x000000000002841d],
    [0xf98e0d5a4af7b3aa, 0x9cd94abdaf101564, 0x00000006d8e21fb6],
    [0xee216e919b8ddc76, 0x226db0bdd5238971, 0x0000000cb72b86b4],
    [0x73b029e3bf70957a, 0x9fc7323bfadeda7e, 0x0000000c237520e2],
    [0xb12dd13bc980a17a, 0x38899a5e6d22f8e9, 0x00000016f674d87b],
    [0xcc810997971256b6, 0x33c3388530d28a96, 0x0000001cb088f3f7],
    [0x8693b83878e1ea75, 0xbcf8fd1e4133c033, 0x0000001bc101304e],
    [0x6531585211d25543, 0xb4f405e054aba882, 0x000000125529313a],
    [0xfb2af43d8f94a3ed, 0xc91981e8deba22e2, 0x0000000dab336aee],
    [0x01d8347d82dd6567, 0xf1eca1c22bf51851, 0x00000019cb5544f6],
    [0x1a14c8d058fc149d, 0xc69324bab157db9d, 0x0000001bb1acec85],
    [0x384c069b7b67fa65, 0x3a293e66a4ce715d, 0x000000015841ecab],
    [0xcc2fe2a1c3a6b9ec, 0xbcf7b65b9380f1ad, 0x0000000a108a9a15],
    [0x663ac386bf6d8a0f, 0x43f9b5a82f4f0127, 0x000000050fb1eb26],
    [0x0b75b9c2e3259662, 0x136a601f1d2c2114, 0x00000008e8cda2b8],
    [0x8e2a15809447fe64, 0xee49453056ccd7ac, 0x0000000d0e617176],
    [0xc67d3ff0b8320940, 0x93ad916c24bf6072, 0x0000001bb0d4130b],
    [0xc5b6479299f445e2, 0x5c458b597ae4d5b3, 0x00000002b208f974],
    [0xac259687ad4f129f, 0x531b45e18d55cc27, 0x0000001b179f59c2],
    [0x7b56899c33b95f06, 0x8a65c52fa7a18623, 0x0000000f71419d16],
    [0x10781739a0495d5e, 0xe7e4ab5a529d2318, 0x000000053f867ede],
    [0x02eecd209cb81e19, 0x54952ecda5f69297, 0x0000001618d41607],
    [0x5798715af5f7f592, 0x43e3ef118c2ff53e, 0x00000001b4ed0c45],
    [0x70d9e2d7ce781e08, 0xb6813afcbd3404f2, 0x00000010208706c8],
    [0x1f662c18a9045d5e, 0xb4303bb9e5c16766, 0x00000010ee06f257],
    [0xd49523823f037758, 0xd4e8787758420466, 0x000000146b8eb6f5],
    [0x0ee47a4fbff6d61d, 0x68307a5e705364a4, 0x0000001b6f50a19b],
    [0x3dba4b4e12271d84, 0xa1414efe27891162, 0x0000000661957993],
    [0x4a9189a7ff5bd17a, 0xa054eaa8410a9621, 0x0000000492088bbb],
    [0x5d88560187dc7092, 0xf15d544a56acab1d, 0x0000000de20111ac],
    [0xab18bdc11ab68395, 0x7b3497b2f33ddba3, 0x0000000a76cd2b05],
    [0x2d0c81324969e9a8, 0xff68c8c3a832c59f, 0x0000000146b58fd0],
    [0x2d1d407dd26d625b, 0x8be144cea11294d8, 0x00000012dbd6b4d6],
    [0xe0131382701b2087, 0xc3b7389405e3750e, 0x0000001426915abe],
    [0xd9b29d45da512f9f, 0xb90bc37452f4edc7, 0x0000000e9d0e7cb0],
    [0xa56f29144a3230a3, 0xab5223995d04d178, 0x0000000b581b7922],
    [0x19b835f258612e44, 0x92c914929dfd55e0, 0x00000008127258cc],
    [0xa8b8c9dc291931e5, 0xd4d81dda347fc18a, 0x00000011d4211086],
    [0xfb31401597b6c4f3, 0xc6eb33e231037ed0, 0x00000001972f3cd5],
    [0x63856d0c9920b344, 0xee4dc50135ac5b9a, 0x00000013f8b58d67],
    [0xc8ea97d04bb535e7, 0x278bf725b01770ec, 0x0000001832c34939],
    [0x708aaa2b6b5a6d0b, 0xcd451212ffd9c4a5, 0x0000000d4eac255c],
    [0xca22ae3c681dddde, 0xc0a8173441a0336f, 0x000000159b6ba0af],
    [0x19d12e411638e988, 0xa2dea2021d6bcc84, 0x0000000b1e46507b],
    [0xe1c5d7979ee46153, 0x9de3363288caf9dd, 0x0000001cc94ad7c7],
    [0xbef1db30b5056680, 0x88b0f1a09bab7dd9, 0x00000010acb0dac1],
    [0xebf992b56be10000, 0xfd26e600354c6bac, 0x0000000f4220b7fc],
    [0xfec2e7798a000000, 0x19e4d6d7ed5eeb24, 0x0000001d19eae029],
    [0x0c90eae400000000, 0x93200c97e0835d9e, 0x0000000991d1bf9b],
    [0x327fe80000000000, 0xde0b2cc165d7ab3a, 0x000000066b94a645],
    [0x7d10000000000000, 0x5020928f97c1c742, 0x00000010446b473e],
    [0xa000000000000000, 0xf600413d180c624e, 0x0000000e8224e098],
    [0x0000000000000000, 0x86c5871507be4a40, 0x00000005cfc9bd4c],
    [0x0000000000000000, 0xf8061bb191168000, 0x00000011d154fb4c],
    [0x0000000000000000, 0x671b9384c1000000, 0x00000011ebb357c3],
    [0x0000000000000000, 0x18bdda4a00000000, 0x0000000fb18490f2],
    [0x0000000000000000, 0x2cc2640000000000, 0x0000001a90b0ab0a],
    [0x0000000000000000, 0x8ae8000000000000, 0x000000025e77c14d],
    [0x0000000000000000, 0x1000000000000000, 0x000000120de6372b],
    [0x0000000000000000, 0x0000000000000000, 0x0000000a06b99aa0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x0000000000000359, 0x0000000000000000, 0x0000000000000000],
    [0x000000c75809c42d, 0x0000000000000000, 0x0000000000000000],
    [0x69d2818df38bb85c, 0x000000000000002e, 0x0000000000000000],
    [0xc0bfb7b636cc64d2, 0x0000000ace73cbfd, 0x0000000000000000],
    [0xc933d96e184be07f, 0x841d689391085cc2, 0x0000000000000002],
    [0x1564f98e0d5a4af8, 0x1fb69cd94abdaf10, 0x0000000095f83d0a],
    [0x8971ee216e919b8e, 0x86b4226db0bdd523, 0x000000025b6e2706],
    [0xda7e73b029e3bf71, 0x20e29fc7323bfade, 0x0000000184fdb296],
    [0xf8e9b12dd13bc981, 0xd87b38899a5e6d22, 0x0000000526f57919],
    [0x8a96cc8109979713, 0xf3f733c3388530d2, 0x00000006048504f8],
    [0xc0338693b83878e2, 0x304ebcf8fd1e4133, 0x0000001c295c2c24],
    [0xa8826531585211d3, 0x313ab4f405e054ab, 0x000000086d03c309],
    [0x22e2fb2af43d8f95, 0x6aeec91981e8deba, 0x0000000223e765dd],
    [0x185101d8347d82de, 0x44f6f1eca1c22bf5, 0x00000015c021125e],
    [0xdb9d1a14c8d058fd, 0xec85c69324bab157, 0x00000015f2e4c8b9],
    [0x715d384c069b7b68, 0xecab3a293e66a4ce, 0x0000000d7c88d1de],
    [0xf1adcc2fe2a1c3a7, 0x9a15bcf7b65b9380, 0x0000001619f0bc27],
    [0x0127663ac386bf6e, 0xeb2643f9b5a82f4f, 0x000000093874f335],
    [0x21140b75b9c2e326, 0xa2b8136a601f1d2c, 0x0000000c8dcbd23b],
    [0xd7ac8e2a15809448, 0x7176ee49453056cc, 0x0000000de28f5d9a],
    [0x6072c67d3ff0b833, 0x130b93ad916c24bf, 0x00000006282387fe],
    [0xd5b3c5b6479299f5, 0xf9745c458b597ae4, 0x0000001d5a9e9b06],
    [0xcc27ac259687ad50, 0x59c2531b45e18d55, 0x000000019fb56219],
    [0x86237b56899c33ba, 0x9d168a65c52fa7a1, 0x00000005e703c8e0],
    [0x231810781739a04a, 0x7edee7e4ab5a529d, 0x000000167e9eed68],
    [0x929702eecd209cb9, 0x160754952ecda5f6, 0x00000018546c25a5],
    [0xf53e5798715af5f8, 0x0c4543e3ef118c2f, 0x00000008a2803449],
    [0x04f270d9e2d7ce79, 0x06c8b6813afcbd34, 0x0000001101fefbff],
    [0x67661f662c18a905, 0xf257b4303bb9e5c1, 0x0000001d935e9227],
    [0x0466d49523823f04, 0xb6f5d4e878775842, 0x000000094d018482],
    [0x64a40ee47a4fbff7, 0xa19b68307a5e7053, 0x00000000a1cedc51],
    [0x11623dba4b4e1228, 0x7993a1414efe2789, 0x00000013019a7204],
    [0x96214a9189a7ff5c, 0x8bbba054eaa8410a, 0x000000010ab9b0e7],
    [0xab1d5d88560187dd, 0x11acf15d544a56ac, 0x000000181bd00114],
    [0xdba3ab18bdc11ab7, 0x2b057b3497b2f33d, 0x00000004ac35539c],
    [0xc59f2d0c8132496a, 0x8fd0ff68c8c3a832, 0x000000068ef25ea3],
    [0x94d82d1d407dd26e, 0xb4d68be144cea112, 0x0000000847a5be11],
    [0x750ee0131382701c, 0x5abec3b7389405e3, 0x000000041f6233fe],
    [0xedc7d9b29d45da52, 0x7cb0b90bc37452f4, 0x0000001d6b504177],
    [0xd178a56f29144a33, 0x7922ab5223995d04, 0x0000001bd1fc0558],
    [0x55e019b835f25862, 0x58cc92c914929dfd, 0x000000149969abec],
    [0xc18aa8b8c9dc291a, 0x1086d4d81dda347f, 0x0000001939fa0ef6],
    [0x7ed0fb31401597b7, 0x3cd5c6eb33e23103, 0x0000001b7d322d34],
    [0x5b9a63856d0c9921, 0x8d67ee4dc50135ac, 0x0000000c299b1572],
    [0x70ecc8ea97d04bb6, 0x4939278bf725b017, 0x0000001aabda6805],
    [0xc4a5708aaa2b6b5b, 0x255ccd451212ffd9, 0x000000013b126446],
    [0x336fca22ae3c681e, 0xa0afc0a8173441a0, 0x000000105506369d],
    [0xcc8419d12e411639, 0x507ba2dea2021d6b, 0x00000006e5f28beb],
    [0xf9dde1c5d7979ee5, 0xd7c79de3363288ca, 0x00000018fc6f966a],
    [0x7dd9bef1db30b506, 0xdac188b0f1a09bab, 0x00000018e0551dbb],
    [0x6bacebf992b56be1, 0xb7fcfd26e600354c, 0x0000000def9b6d89],
    [0xeb24fec2e7798a00, 0xe02919e4d6d7ed5e, 0x000000024347a7b5],
    [0x5d9e0c90eae40000, 0xbf9b93200c97e083, 0x0000000c8b3cd491],
    [0xab3a327fe8000000, 0xa645de0b2cc165d7, 0x0000000421e41faf],
    [0xc7427d1000000000, 0x473e5020928f97c1, 0x0000000b1821b967],
    [0x624ea00000000000, 0xe098f600413d180c, 0x000000180bddb62a],
    [0x4a40000000000000, 0xbd4c86c5871507be, 0x00000009fbb031ee],
    [0x8000000000000000, 0xfb4cf8061bb19116, 0x00000019c895e476],
    [0x0000000000000000, 0x57c3671b9384c100, 0x0000001bb3dbcbc1],
    [0x0000000000000000, 0x90f218bdda4a0000, 0x0000000f36bc638f],
    [0x0000000000000000, 0xab0a2cc264000000, 0x000000039fd145b5],
    [0x0000000000000000, 0xc14d8ae800000000, 0x0000000c7ede9565],
    [0x0000000000000000, 0x372b100000000000, 0x00000017b1137230],
    [0x0000000000000000, 0x9aa0000000000000, 0x0000000b39de281f],
    [0x0000000000000000, 0x4000000000000000, 0x000000075bbed442],
    [0x0000000000000000, 0x0000000000000000, 0x0000000f6ccec680],
    [0x0000000000c7580a, 0x0000000000000000, 0x0000000000000000],
    [0x002e69d2818df38c, 0x0000000000000000, 0x0000000000000000],
    [0xcbfdc0bfb7b636cd, 0x00000000000ace73, 0x0000000000000000],
    [0x5cc2c933d96e184c, 0x0002841d68939108, 0x0000000000000000],
    [0xaf101564f98e0d5b, 0x3d0a1fb69cd94abd, 0x00000000000095f8],
    [0xd5238971ee216e92, 0x270686b4226db0bd, 0x0000001bfec4ed90],
    [0xfadeda7e73b029e4, 0xb29620e29fc7323b, 0x00000003c2c2b9c3],
    [0x6d22f8e9b12dd13c, 0x7919d87b38899a5e, 0x0000000fc31772ce],
    [0x30d28a96cc810998, 0x04f8f3f733c33885, 0x00000012455bb9ff],
    [0x4133c0338693b839, 0x2c24304ebcf8fd1e, 0x0000001d92f297e9],
    [0x54aba88265315853, 0xc309313ab4f405e0, 0x000000187cc3e1bb],
    [0xdeba22e2fb2af43e, 0x65dd6aeec91981e8, 0x0000000dea1599c5],
    [0x2bf5185101d8347e, 0x125e44f6f1eca1c2, 0x0000001028701138],
    [0xb157db9d1a14c8d1, 0xc8b9ec85c69324ba, 0x0000000d0e230518],
    [0xa4ce715d384c069c, 0xd1deecab3a293e66, 0x00000005c53f27bd],
    [0x9380f1adcc2fe2a2, 0xbc279a15bcf7b65b, 0x0000000e64bf683f],
    [0x2f4f0127663ac387, 0xf335eb2643f9b5a8, 0x0000000ed6e69acc],
    [0x1d2c21140b75b9c3, 0xd23ba2b8136a601f, 0x00000011ea947389],
    [0x56ccd7ac8e2a1581, 0x5d9a7176ee494530, 0x000000024963f643],
    [0x24bf6072c67d3ff1, 0x87fe130b93ad916c, 0x0000000faf4e0eea],
    [0x7ae4d5b3c5b64793, 0x9b06f9745c458b59, 0x00000018cdc16c89],
    [0x8d55cc27ac259688, 0x621959c2531b45e1, 0x000000023c897203],
    [0xa7a186237b56899d, 0xc8e09d168a65c52f, 0x00000000c9a78657],
    [0x529d23181078173a, 0xed687edee7e4ab5a, 0x00000014705fdfd3],
    [0xa5f6929702eecd21, 0x25a5160754952ecd, 0x000000138a761f6e],
    [0x8c2ff53e5798715b, 0x34490c4543e3ef11, 0x00000019a5469b17],
    [0xbd3404f270d9e2d8, 0xfbff06c8b6813afc, 0x0000000567149906],
    [0xe5c167661f662c19, 0x9227f257b4303bb9, 0x00000001a04ce0d1],
    [0x58420466d4952383, 0x8482b6f5d4e87877, 0x00000012fe017e35],
    [0x705364a40ee47a50, 0xdc51a19b68307a5e, 0x0000000c75e6115b],
    [0x278911623dba4b4f, 0x72047993a1414efe, 0x000000156351d532],
    [0x410a96214a9189a8, 0xb0e78bbba054eaa8, 0x0000000bbec76cad],
    [0x56acab1d5d885602, 0x011411acf15d544a, 0x0000000aa365d615],
    [0xf33ddba3ab18bdc2, 0x539c2b057b3497b2, 0x00000004e3f2d8ff],
    [0xa832c59f2d0c8133, 0x5ea38fd0ff68c8c3, 0x0000001da541c1d5],
    [0xa11294d82d1d407e, 0xbe11b4d68be144ce, 0x00000013e06dfd36],
    [0x05e3750ee0131383, 0x33fe5abec3b73894, 0x0000000cbee79d4e],
    [0x52f4edc7d9b29d46, 0x41777cb0b90bc374, 0x0000001235449af3],
    [0x5d04d178a56f2915, 0x05587922ab522399, 0x0000001ad5c6dd46],
    [0x9dfd55e019b835f3, 0xabec58cc92c91492, 0x000000104d91db5b],
    [0x347fc18aa8b8c9dd, 0x0ef61086d4d81dda, 0x00000015580d3a4d],
    [0x31037ed0fb314016, 0x2d343cd5c6eb33e2, 0x00000011f10a83a3],
    [0x35ac5b9a63856d0d, 0x15728d67ee4dc501, 0x0000000830affd1d],
    [0xb01770ecc8ea97d1, 0x68054939278bf725, 0x00000006c587406c],
    [0xffd9c4a5708aaa2c, 0x6446255ccd451212, 0x000000193d855522],
    [0x41a0336fca22ae3d, 0x369da0afc0a81734, 0x0000000801e79fee],
    [0x1d6bcc8419d12e42, 0x8beb507ba2dea202, 0x00000019a93a25f3],
    [0x88caf9dde1c5d798, 0x966ad7c79de33632, 0x0000001ae71c9382],
    [0x9bab7dd9bef1db31, 0x1dbbdac188b0f1a0, 0x000000009a3b26b1],
    [0x354c6bacebf992b6, 0x6d89b7fcfd26e600, 0x0000000b6f8cefe2],
    [0xed5eeb24fec2e77a, 0xa7b5e02919e4d6d7, 0x00000016eac24cae],
    [0xe0835d9e0c90eae4, 0xd491bf9b93200c97, 0x0000000adcdc9e67],
    [0x65d7ab3a327fe800, 0x1fafa645de0b2cc1, 0x000000182cc56491],
    [0x97c1c7427d100000, 0xb967473e5020928f, 0x00000003fca80dfc],
    [0x180c624ea0000000, 0xb62ae098f600413d, 0x0000001d0a24bfd7],
    [0x07be4a4000000000, 0x31eebd4c86c58715, 0x000000146c04ad4c],
    [0x9116800000000000, 0xe476fb4cf8061bb1, 0x00000011bd942ea4],
    [0xc100000000000000, 0xcbc157c3671b9384, 0x0000000896f5f7c3],
    [0x0000000000000000, 0x638f90f218bdda4a, 0x0000000fc8f3a04f],
    [0x0000000000000000, 0x45b5ab0a2cc26400, 0x000000127bf29f54],
    [0x0000000000000000, 0x9565c14d8ae80000, 0x000000139f054cb5],
    [0x0000000000000000, 0x7230372b10000000, 0x0000000c79d49aa5],
    [0x0000000000000000, 0x281f9aa000000000, 0x00000008b7f559d2],
    [0x0000000000000000, 0xd442400000000000, 0x0000001320ec3f4e],
    [0x0000000000000000, 0xc680000000000000, 0x000000125a952816],
    [0x0000000000000000, 0x0000000000000000, 0x000000054d84e1a1],
    [0x0000000000000000, 0x0000000000000000, 0x00000007aef40a00],
    [0x00000000000000c8, 0x0000000000000000, 0x0000000000000000],
    [0x0000002e69d2818e, 0x0000000000000000, 0x0000000000000000],
    [0xce73cbfdc0bfb7b7, 0x000000000000000a, 0x0000000000000000],
    [0x91085cc2c933d96f, 0x00000002841d6893, 0x0000000000000000],
    [0x4abdaf101564f98f, 0x95f83d0a1fb69cd9, 0x0000000000000000],
    [0xb0bdd5238971ee22, 0xed90270686b4226d, 0x0000000022eae3bb],
    [0x323bfadeda7e73b1, 0xb9c3b29620e29fc7, 0x0000000df3fc6b29],
    [0x9a5e6d22f8e9b12e, 0x72ce7919d87b3889, 0x00000009b70ac676],
    [0x388530d28a96cc82, 0xb9ff04f8f3f733c3, 0x0000001b94141cb4],
    [0xfd1e4133c0338694, 0x97e92c24304ebcf8, 0x0000000c46bf4451],
    [0x05e054aba8826532, 0xe1bbc309313ab4f4, 0x00000012ff58814e],
    [0x81e8deba22e2fb2b, 0x99c565dd6aeec919, 0x000000125db84f04],
    [0xa1c22bf5185101d9, 0x1138125e44f6f1ec, 0x000000011238a08f],
    [0x24bab157db9d1a15, 0x0518c8b9ec85c693, 0x0000000382142b8d],
    [0x3e66a4ce715d384d, 0x27bdd1deecab3a29, 0x00000003080c0d31],
    [0xb65b9380f1adcc30, 0x683fbc279a15bcf7, 0x0000000b71e170ea],
    [0xb5a82f4f0127663b, 0x9accf335eb2643f9, 0x00000018c65d5cf6],
    [0x601f1d2c21140b76, 0x7389d23ba2b8136a, 0x0000001b9d63f17d],
    [0x453056ccd7ac8e2b, 0xf6435d9a7176ee49, 0x0000001d357b4186],
    [0x916c24bf6072c67e, 0x0eea87fe130b93ad, 0x000000019ef7296a],
    [0x8b597ae4d5b3c5b7, 0x6c899b06f9745c45, 0x00000018b190b632],
    [0x45e18d55cc27ac26, 0x7203621959c2531b, 0x0000000bbd80cb26],
    [0xc52fa7a186237b57, 0x8657c8e09d168a65, 0x00000008f385b39b],
    [0xab5a529d23181079, 0xdfd3ed687edee7e4, 0x00000006689ac41b],
    [0x2ecda5f6929702ef, 0x1f6e25a516075495, 0x000000067d707bd1],
    [0xef118c2ff53e5799, 0x9b1734490c4543e3, 0x00000012e34b4dbc],
    [0x3afcbd3404f270da, 0x9906fbff06c8b681, 0x0000000e1c637762],
    [0x3bb9e5c167661f67, 0xe0d19227f257b430, 0x00000016f4e27706],
    [0x787758420466d496, 0x7e358482b6f5d4e8, 0x0000000199f8f826],
    [0x7a5e705364a40ee5, 0x115bdc51a19b6830, 0x00000008f65ca152],
    [0x4efe278911623dbb, 0xd53272047993a141, 0x000000131b9f5ebb],
    [0xeaa8410a96214a92, 0x6cadb0e78bbba054, 0x0000000dee5016d9],
    [0x544a56acab1d5d89, 0xd615011411acf15d, 0x00000014d21df802],
    [0x97b2f33ddba3ab19, 0xd8ff539c2b057b34, 0x00000000a90ddcce],
    [0xc8c3a832c59f2d0d, 0xc1d55ea38fd0ff68, 0x000000125baf9916],
    [0x44cea11294d82d1e, 0xfd36be11b4d68be1, 0x000000054c6ebc1c],
    [0x389405e3750ee014, 0x9d4e33fe5abec3b7, 0x00000006bfe2d089],
    [0xc37452f4edc7d9b3, 0x9af341777cb0b90b, 0x000000023d113d26],
    [0x23995d04d178a570, 0xdd4605587922ab52, 0x00000008fd0dbcaf],
    [0x14929dfd55e019b9, 0xdb5babec58cc92c9, 0x0000000b24f003f3],
    [0x1dda347fc18aa8b9, 0x3a4d0ef61086d4d8, 0x0000001af99b80db],
    [0x33e231037ed0fb32, 0x83a32d343cd5c6eb, 0x000000153d98d0ce],
    [0xc50135ac5b9a6386, 0xfd1d15728d67ee4d, 0x0000001247cfbf72],
    [0xf725b01770ecc8eb, 0x406c68054939278b, 0x0000001ac5dcb329],
    [0x1212ffd9c4a5708b, 0x55226446255ccd45, 0x000000099aca4a05],
    [0x173441a0336fca23, 0x9fee369da0afc0a8, 0x000000013dd858f9],
    [0xa2021d6bcc8419d2, 0x25f38beb507ba2de, 0x0000001c51661415],
    [0x363288caf9dde1c6, 0x9382966ad7c79de3, 0x00000004ec88a5b3],
    [0xf1a09bab7dd9bef2, 0x26b11dbbdac188b0, 0x0000000c022e879e],
    [0xe600354c6bacebfa, 0xefe26d89b7fcfd26, 0x000000070525e2ed],
    [0xd6d7ed5eeb24fec3, 0x4caea7b5e02919e4, 0x0000001998c23cbd],
    [0x0c97e0835d9e0c91, 0x9e67d491bf9b9320, 0x0000000e45bcc039],
    [0x2cc165d7ab3a3280, 0x64911fafa645de0b, 0x0000000d6a58af71],
    [0x928f97c1c7427d10, 0x0dfcb967473e5020, 0x0000001a66bd6af5],
    [0x413d180c624ea000, 0xbfd7b62ae098f600, 0x0000001b410005cb],
    [0x871507be4a400000, 0xad4c31eebd4c86c5, 0x00000011a303e41f],
    [0x1bb1911680000000, 0x2ea4e476fb4cf806, 0x000000076017ce16],
    [0x9384c10000000000, 0xf7c3cbc157c3671b, 0x000000052a2990a6],
    [0xda4a000000000000, 0xa04f638f90f218bd, 0x0000000912a9eb3e],
    [0x6400000000000000, 0x9f5445b5ab0a2cc2, 0x0000000e94d02632],
    [0x0000000000000000, 0x4cb59565c14d8ae8, 0x0000000bc954367b],
    [0x0000000000000000, 0x9aa57230372b1000, 0x0000001cb53b4931],
    [0x0000000000000000, 0x59d2281f9aa00000, 0x0000000b8ca24cde],
    [0x0000000000000000, 0x3f4ed44240000000, 0x00000015f7bfea8b],
    [0x0000000000000000, 0x2816c68000000000, 0x000000029e64204b],
    [0x0000000000000000, 0xe1a1000000000000, 0x000000117faeab14],
    [0x0000000000000000, 0x0a00000000000000, 0x00000004dca04fe3],
    [0x0000000000000000, 0x0000000000000000, 0x000000170f3029e4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x00000000002e69d3, 0x0000000000000000, 0x0000000000000000],
    [0x000ace73cbfdc0c0, 0x0000000000000000, 0x0000000000000000],
    [0x689391085cc2c934, 0x000000000002841d, 0x0000000000000000],
    [0x9cd94abdaf101565, 0x000095f83d0a1fb6, 0x0000000000000000],
    [0x226db0bdd5238972, 0xe3bbed90270686b4, 0x00000000000022ea],
    [0x9fc7323bfadeda7f, 0x6b29b9c3b29620e2, 0x00000018e31da67f],
    [0x38899a5e6d22f8ea, 0xc67672ce7919d87b, 0x0000001daabd9f78],
    [0x33c3388530d28a97, 0x1cb4b9ff04f8f3f7, 0x0000001c1ec3fc50],
    [0xbcf8fd1e4133c034, 0x445197e92c24304e, 0x00000012a70e223c],
    [0xb4f405e054aba883, 0x814ee1bbc309313a, 0x0000000e082f7500],
    [0xc91981e8deba22e3, 0x4f0499c565dd6aee, 0x000000001e1b5d82],
    [0xf1eca1c22bf51852, 0xa08f1138125e44f6, 0x00000000899b6a8e],
    [0xc69324bab157db9e, 0x2b8d0518c8b9ec85, 0x0000000367d919b9],
    [0x3a293e66a4ce715e, 0x0d3127bdd1deecab, 0x0000000d4f9acf5f],
    [0xbcf7b65b9380f1ae, 0x70ea683fbc279a15, 0x0000001621834423],
    [0x43f9b5a82f4f0128, 0x5cf69accf335eb26, 0x000000084073ea22],
    [0x136a601f1d2c2115, 0xf17d7389d23ba2b8, 0x000000080033df60],
    [0xee49453056ccd7ad, 0x4186f6435d9a7176, 0x000000169245ada5],
    [0x93ad916c24bf6073, 0x296a0eea87fe130b, 0x00000008aca0eba6],
    [0x5c458b597ae4d5b4, 0xb6326c899b06f974, 0x00000008e29e77ea],
    [0x531b45e18d55cc28, 0xcb267203621959c2, 0x00000018d8836d1c],
    [0x8a65c52fa7a18624, 0xb39b8657c8e09d16, 0x00000006b43ac9b3],
    [0xe7e4ab5a529d2319, 0xc41bdfd3ed687ede, 0x0000000c09a7af3d],
    [0x54952ecda5f69298, 0x7bd11f6e25a51607, 0x0000000e618b2218],
    [0x43e3ef118c2ff53f, 0x4dbc9b1734490c45, 0x00000005b356ffbe],
    [0xb6813afcbd3404f3, 0x77629906fbff06c8, 0x0000000e8196648a],
    [0xb4303bb9e5c16767, 0x7706e0d19227f257, 0x000000026fd7ccc8],
    [0xd4e8787758420467, 0xf8267e358482b6f5, 0x00000010df3f5dde],
    [0x68307a5e705364a5, 0xa152115bdc51a19b, 0x000000161c9d160c],
    [0xa1414efe27891163, 0x5ebbd53272047993, 0x00000002f0d0eca9],
    [0xa054eaa8410a9622, 0x16d96cadb0e78bbb, 0x00000009a1d8ebe1],
    [0xf15d544a56acab1e, 0xf802d615011411ac, 0x000000169af876de],
    [0x7b3497b2f33ddba4, 0xdcced8ff539c2b05, 0x000000161c94c8bd],
    [0xff68c8c3a832c5a0, 0x9916c1d55ea38fd0, 0x0000000e674b50ac],
    [0x8be144cea11294d9, 0xbc1cfd36be11b4d6, 0x0000000a623f8728],
    [0xc3b7389405e3750f, 0xd0899d4e33fe5abe, 0x000000097bfbfc3a],
    [0xb90bc37452f4edc8, 0x3d269af341777cb0, 0x0000000db19f9296],
    [0xab5223995d04d179, 0xbcafdd4605587922, 0x000000052d8a3b2f],
    [0x92c914929dfd55e1, 0x03f3db5babec58cc, 0x0000000b1d59b4ad],
    [0xd4d81dda347fc18b, 0x80db3a4d0ef61086, 0x0000000a7b21195e],
    [0xc6eb33e231037ed1, 0xd0ce83a32d343cd5, 0x0000001600d69bfd],
    [0xee4dc50135ac5b9b, 0xbf72fd1d15728d67, 0x0000001d4b327b54],
    [0x278bf725b01770ed, 0xb329406c68054939, 0x00000013bb5d8a92],
    [0xcd451212ffd9c4a6, 0x4a0555226446255c, 0x000000045a990a08],
    [0xc0a8173441a03370, 0x58f99fee369da0af, 0x00000001ee124c3c],
    [0xa2dea2021d6bcc85, 0x141525f38beb507b, 0x0000000e0cfeac3b],
    [0x9de3363288caf9de, 0xa5b39382966ad7c7, 0x0000000dc1599250],
    [0x88b0f1a09bab7dda, 0x879e26b11dbbdac1, 0x00000012c6f3b3c5],
    [0xfd26e600354c6bad, 0xe2edefe26d89b7fc, 0x00000010304be510],
    [0x19e4d6d7ed5eeb25, 0x3cbd4caea7b5e029, 0x00000003ee82ac7b],
    [0x93200c97e0835d9f, 0xc0399e67d491bf9b, 0x0000001cb1836879],
    [0xde0b2cc165d7ab3b, 0xaf7164911fafa645, 0x0000001c58eafbd8],
    [0x5020928f97c1c743, 0x6af50dfcb967473e, 0x00000014a60ea6d3],
    [0xf600413d180c624f, 0x05cbbfd7b62ae098, 0x000000136c16a409],
    [0x86c5871507be4a40, 0xe41fad4c31eebd4c, 0x0000000219ca905a],
    [0xf8061bb191168000, 0xce162ea4e476fb4c, 0x0000001529883fff],
    [0x671b9384c1000000, 0x90a6f7c3cbc157c3, 0x0000001dc1c5eeb5],
    [0x18bdda4a00000000, 0xeb3ea04f638f90f2, 0x0000000c78b9c3ae],
    [0x2cc2640000000000, 0x26329f5445b5ab0a, 0x0000000aec95f83e],
    [0x8ae8000000000000, 0x367b4cb59565c14d, 0x0000000e7861af50],
    [0x1000000000000000, 0x49319aa57230372b, 0x00000012ad0e7bd7],
    [0x0000000000000000, 0x4cde59d2281f9aa0, 0x0000001452a5563c],
    [0x0000000000000000, 0xea8b3f4ed4424000, 0x0000000e0a2d111c],
    [0x0000000000000000, 0x204b2816c6800000, 0x00000006bb8a006d],
    [0x0000000000000000, 0xab14e1a100000000, 0x00000019686cdaee],
    [0x0000000000000000, 0x4fe30a0000000000, 0x00000019c4580d8e],
    [0x0000000000000000, 0x29e4000000000000, 0x000000035510aceb],
    [0x0000000000000000, 0xe800000000000000, 0x00000018f3734e35],
    [0x0000000000000000, 0x0000000000000000, 0x0000000c8d101910],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x000000000000002f, 0x0000000000000000, 0x0000000000000000],
    [0x0000000ace73cbfe, 0x0000000000000000, 0x0000000000000000],
    [0x841d689391085cc3, 0x0000000000000002, 0x0000000000000000],
    [0x1fb69cd94abdaf11, 0x0000000095f83d0a, 0x0000000000000000],
    [0x86b4226db0bdd524, 0x22eae3bbed902706, 0x0000000000000000],
    [0x20e29fc7323bfadf, 0xa67f6b29b9c3b296, 0x0000000008213f56],
    [0xd87b38899a5e6d23, 0x9f78c67672ce7919, 0x000000142cc3e5b9],
    [0xf3f733c3388530d3, 0xfc501cb4b9ff04f8, 0x0000000d6a983c39],
    [0x304ebcf8fd1e4134, 0x223c445197e92c24, 0x0000000d8035ffe6],
    [0x313ab4f405e054ac, 0x7500814ee1bbc309, 0x00000017c7a51303],
    [0x6aeec91981e8debb, 0x5d824f0499c565dd, 0x00000000ce0e3a6d],
    [0x44f6f1eca1c22bf6, 0x6a8ea08f1138125e, 0x0000001976ad9462],
    [0xec85c69324bab158, 0x19b92b8d0518c8b9, 0x00000016ea10a0e2],
    [0xecab3a293e66a4cf, 0xcf5f0d3127bdd1de, 0x00000016d73e8eb9],
    [0x9a15bcf7b65b9381, 0x442370ea683fbc27, 0x0000000d75bf44d9],
    [0xeb2643f9b5a82f50, 0xea225cf69accf335, 0x00000014c8ad981b],
    [0xa2b8136a601f1d2d, 0xdf60f17d7389d23b, 0x000000067fd6cad7],
    [0x7176ee49453056cd, 0xada54186f6435d9a, 0x00000014759d0e3b],
    [0x130b93ad916c24c0, 0xeba6296a0eea87fe, 0x0000000de51aa287],
    [0xf9745c458b597ae5, 0x77eab6326c899b06, 0x00000001d8194d71],
    [0x59c2531b45e18d56, 0x6d1ccb2672036219, 0x0000001a6b3ec3ce],
    [0x9d168a65c52fa7a2, 0xc9b3b39b8657c8e0, 0x000000124291283c],
    [0x7edee7e4ab5a529e, 0xaf3dc41bdfd3ed68, 0x0000000e273db7a6],
    [0x160754952ecda5f7, 0x22187bd11f6e25a5, 0x0000000901c72da1],
    [0x0c4543e3ef118c30, 0xffbe4dbc9b173449, 0x00000007b6e44c2a],
    [0x06c8b6813afcbd35, 0x648a77629906fbff, 0x0000000a02f0a231],
    [0xf257b4303bb9e5c2, 0xccc87706e0d19227, 0x0000000b80095e24],
    [0xb6f5d4e878775843, 0x5ddef8267e358482, 0x0000000891726d9c],
    [0xa19b68307a5e7054, 0x160ca152115bdc51, 0x000000069ac93d64],
    [0x7993a1414efe278a, 0xeca95ebbd5327204, 0x000000174d99262c],
    [0x8bbba054eaa8410b, 0xebe116d96cadb0e7, 0x0000000a75b4d975],
    [0x11acf15d544a56ad, 0x76def802d6150114, 0x0000001b74a9d1cb],
    [0x2b057b3497b2f33e, 0xc8bddcced8ff539c, 0x0000001192067115],
    [0x8fd0ff68c8c3a833, 0x50ac9916c1d55ea3, 0x00000005126fb480],
    [0xb4d68be144cea113, 0x8728bc1cfd36be11, 0x0000000012c88ec4],
    [0x5abec3b7389405e4, 0xfc3ad0899d4e33fe, 0x0000000ff495c481],
    [0x7cb0b90bc37452f5, 0x92963d269af34177, 0x000000007654da77],
    [0x7922ab5223995d05, 0x3b2fbcafdd460558, 0x0000001bd7152823],
    [0x58cc92c914929dfe, 0xb4ad03f3db5babec, 0x0000000833f167e7],
    [0x1086d4d81dda3480, 0x195e80db3a4d0ef6, 0x000000182558648e],
    [0x3cd5c6eb33e23104, 0x9bfdd0ce83a32d34, 0x00000003485f2a90],
    [0x8d67ee4dc50135ad, 0x7b54bf72fd1d1572, 0x00000003ddfe70e5],
    [0x4939278bf725b018, 0x8a92b329406c6805, 0x00000017a0c8cc6b],
    [0x255ccd451212ffda, 0x0a084a0555226446, 0x0000001909f606e2],
    [0xa0afc0a8173441a1, 0x4c3c58f99fee369d, 0x00000016d3974df6],
    [0x507ba2dea2021d6c, 0xac3b141525f38beb, 0x0000001b8b191cf6],
    [0xd7c79de3363288cb, 0x9250a5b39382966a, 0x0000001ba172dd11],
    [0xdac188b0f1a09bac, 0xb3c5879e26b11dbb, 0x0000000417587827],
    [0xb7fcfd26e600354d, 0xe510e2edefe26d89, 0x000000093e6ffeee],
    [0xe02919e4d6d7ed5f, 0xac7b3cbd4caea7b5, 0x00000019d1d83134],
    [0xbf9b93200c97e084, 0x6879c0399e67d491, 0x0000000c4399b93b],
    [0xa645de0b2cc165d8, 0xfbd8af7164911faf, 0x0000000dd4ffc8fa],
    [0x473e5020928f97c2, 0xa6d36af50dfcb967, 0x0000001ca2677b81],
    [0xe098f600413d180d, 0xa40905cbbfd7b62a, 0x0000000062726277],
    [0xbd4c86c5871507bf, 0x905ae41fad4c31ee, 0x0000001bdb252932],
    [0xfb4cf8061bb19117, 0x3fffce162ea4e476, 0x0000000bc5d7af28],
    [0x57c3671b9384c100, 0xeeb590a6f7c3cbc1, 0x000000095f1636e0],
    [0x90f218bdda4a0000, 0xc3aeeb3ea04f638f, 0x00000016919fedea],
    [0xab0a2cc264000000, 0xf83e26329f5445b5, 0x00000018dba745d8],
    [0xc14d8ae800000000, 0xaf50367b4cb59565, 0x00000014b701dc11],
    [0x372b100000000000, 0x7bd749319aa57230, 0x000000041e18e724],
    [0x9aa0000000000000, 0x563c4cde59d2281f, 0x000000087e99e718],
    [0x4000000000000000, 0x111cea8b3f4ed442, 0x00000005aa96fa09],
    [0x0000000000000000, 0x006d204b2816c680, 0x000000021c6d1cf4],
    [0x0000000000000000, 0xdaeeab14e1a10000, 0x0000001b023cf06c],
    [0x0000000000000000, 0x0d8e4fe30a000000, 0x00000019584699c1],
    [0x0000000000000000, 0xaceb29e400000000, 0x0000000f257548b7],
    [0x0000000000000000, 0x4e35e80000000000, 0x0000000cf6842690],
    [0x0000000000000000, 0x1910000000000000, 0x00000003cbe2569c],
    [0x0000000000000000, 0xa000000000000000, 0x000000068ac3ef66],
    [0x0000000000000000, 0x0000000000000000, 0x00000017e4ed3a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x00000000000ace74, 0x0000000000000000, 0x0000000000000000],
    [0x0002841d68939109, 0x0000000000000000, 0x0000000000000000],
    [0x3d0a1fb69cd94abe, 0x00000000000095f8, 0x0000000000000000],
    [0x270686b4226db0be, 0x000022eae3bbed90, 0x0000000000000000],
    [0xb29620e29fc7323c, 0x3f56a67f6b29b9c3, 0x0000000000000821],
    [0x7919d87b38899a5f, 0xe5b99f78c67672ce, 0x00000007bdb34e79],
    [0x04f8f3f733c33886, 0x3c39fc501cb4b9ff, 0x0000001c61a628af],
    [0x2c24304ebcf8fd1f, 0xffe6223c445197e9, 0x0000000aff70dd8d],
    [0xc309313ab4f405e1, 0x13037500814ee1bb, 0x0000000342710640],
    [0x65dd6aeec91981e9, 0x3a6d5d824f0499c5, 0x0000000eeb1fcb0c],
    [0x125e44f6f1eca1c3, 0x94626a8ea08f1138, 0x00000002d8dc0071],
    [0xc8b9ec85c69324bb, 0xa0e219b92b8d0518, 0x0000001a71df90d8],
    [0xd1deecab3a293e67, 0x8eb9cf5f0d3127bd, 0x00000014a2aad2e3],
    [0xbc279a15bcf7b65c, 0x44d9442370ea683f, 0x000000172e173d30],
    [0xf335eb2643f9b5a9, 0x981bea225cf69acc, 0x0000000b3d0d93ba],
    [0xd23ba2b8136a6020, 0xcad7df60f17d7389, 0x0000000da47c2bc6],
    [0x5d9a7176ee494531, 0x0e3bada54186f643, 0x000000107b8da266],
    [0x87fe130b93ad916d, 0xa287eba6296a0eea, 0x00000017c2fcd826],
    [0x9b06f9745c458b5a, 0x4d7177eab6326c89, 0x00000008fed19552],
    [0x621959c2531b45e2, 0xc3ce6d1ccb267203, 0x00000013299cae00],
    [0xc8e09d168a65c530, 0x283cc9b3b39b8657, 0x000000002d96f7d4],
    [0xed687edee7e4ab5b, 0xb7a6af3dc41bdfd3, 0x0000001398289ecd],
    [0x25a5160754952ece, 0x2da122187bd11f6e, 0x0000001218513792],
    [0x34490c4543e3ef12, 0x4c2affbe4dbc9b17, 0x000000043b81edcb],
    [0xfbff06c8b6813afd, 0xa231648a77629906, 0x00000011881524e8],
    [0x9227f257b4303bba, 0x5e24ccc87706e0d1, 0x000000185ca583dd],
    [0x8482b6f5d4e87878, 0x6d9c5ddef8267e35, 0x00000015bd26c99e],
    [0xdc51a19b68307a5f, 0x3d64160ca152115b, 0x0000000715a8fc30],
    [0x72047993a1414eff, 0x262ceca95ebbd532, 0x0000000b3b510fbb],
    [0xb0e78bbba054eaa9, 0xd975ebe116d96cad, 0x0000000dc58ffdb0],
    [0x011411acf15d544b, 0xd1cb76def802d615, 0x0000000b5fa789e3],
    [0x539c2b057b3497b3, 0x7115c8bddcced8ff, 0x000000173db4dc55],
    [0x5ea38fd0ff68c8c4, 0xb48050ac9916c1d5, 0x00000013e4b97799],
    [0xbe11b4d68be144cf, 0x8ec48728bc1cfd36, 0x00000005fc247035],
    [0x33fe5abec3b73895, 0xc481fc3ad0899d4e, 0x0000000c78497006],
    [0x41777cb0b90bc375, 0xda7792963d269af3, 0x0000000193618261],
    [0x05587922ab52239a, 0x28233b2fbcafdd46, 0x00000016c8843119],
    [0xabec58cc92c91493, 0x67e7b4ad03f3db5b, 0x00000005db761d81],
    [0x0ef61086d4d81ddb, 0x648e195e80db3a4d, 0x0000000053cc0403],
    [0x2d343cd5c6eb33e3, 0x2a909bfdd0ce83a3, 0x00000000ca39eaac],
    [0x15728d67ee4dc502, 0x70e57b54bf72fd1d, 0x0000000a4883c887],
    [0x68054939278bf726, 0xcc6b8a92b329406c, 0x00000001bb84ac8d],
    [0x6446255ccd451213, 0x06e20a084a055522, 0x000000033674a4ee],
    [0x369da0afc0a81735, 0x4df64c3c58f99fee, 0x000000199e1d0db8],
    [0x8beb507ba2dea203, 0x1cf6ac3b141525f3, 0x0000000d1c031740],
    [0x966ad7c79de33633, 0xdd119250a5b39382, 0x0000000eed70dcef],
    [0x1dbbdac188b0f1a1, 0x7827b3c5879e26b1, 0x0000001a0b964dba],
    [0x6d89b7fcfd26e601, 0xfeeee510e2edefe2, 0x0000000d9d0b911f],
    [0xa7b5e02919e4d6d8, 0x3134ac7b3cbd4cae, 0x000000077319a9a9],
    [0xd491bf9b93200c98, 0xb93b6879c0399e67, 0x00000009973f3e43],
    [0x1fafa645de0b2cc2, 0xc8fafbd8af716491, 0x0000000fc4a38ef9],
    [0xb967473e50209290, 0x7b81a6d36af50dfc, 0x0000001c5af4d79c],
    [0xb62ae098f600413e, 0x6277a40905cbbfd7, 0x00000006a1afa6e5],
    [0x31eebd4c86c58716, 0x2932905ae41fad4c, 0x000000179afece79],
    [0xe476fb4cf8061bb2, 0xaf283fffce162ea4, 0x0000001c35c10a31],
    [0xcbc157c3671b9385, 0x36e0eeb590a6f7c3, 0x0000000b9168d92c],
    [0x638f90f218bdda4a, 0xedeac3aeeb3ea04f, 0x0000000a4b61bda0],
    [0x45b5ab0a2cc26400, 0x45d8f83e26329f54, 0x00000007aabe360e],
    [0x9565c14d8ae80000, 0xdc11af50367b4cb5, 0x0000000352ba48d8],
    [0x7230372b10000000, 0xe7247bd749319aa5, 0x00000014b07293b0],
    [0x281f9aa000000000, 0xe718563c4cde59d2, 0x0000000b62d70adf],
    [0xd442400000000000, 0xfa09111cea8b3f4e, 0x00000016543f4cdc],
    [0xc680000000000000, 0x1cf4006d204b2816, 0x00000015a5d7ddb1],
    [0x0000000000000000, 0xf06cdaeeab14e1a1, 0x0000000b6f5e67b9],
    [0x0000000000000000, 0x99c10d8e4fe30a00, 0x0000000d7d716fa6],
    [0x0000000000000000, 0x48b7aceb29e40000, 0x00000008fcc67194],
    [0x0000000000000000, 0x26904e35e8000000, 0x00000004b90614b9],
    [0x0000000000000000, 0x569c191000000000, 0x0000000d4e718d43],
    [0x0000000000000000, 0xef66a00000000000, 0x0000000fadad3604],
    [0x0000000000000000, 0x3a40000000000000, 0x0000000126288f83],
    [0x0000000000000000, 0x8000000000000000, 0x00000000c0605676],
    [0x0000000000000000, 0x0000000000000000, 0x0000001b97268100],
    [0x000000000000000b, 0x0000000000000000, 0x0000000000000000],
    [0x00000002841d6894, 0x0000000000000000, 0x0000000000000000],
    [0x95f83d0a1fb69cda, 0x0000000000000000, 0x0000000000000000],
    [0xed90270686b4226e, 0x0000000022eae3bb, 0x0000000000000000],
    [0xb9c3b29620e29fc8, 0x08213f56a67f6b29, 0x0000000000000000],
    [0x72ce7919d87b388a, 0x4e79e5b99f78c676, 0x0000000001e49403],
    [0xb9ff04f8f3f733c4, 0x28af3c39fc501cb4, 0x00000000c515e932],
    [0x97e92c24304ebcf9, 0xdd8dffe6223c4451, 0x0000000badb47065],
    [0xe1bbc309313ab4f5, 0x064013037500814e, 0x00000017b7a76238],
    [0x99c565dd6aeec91a, 0xcb0c3a6d5d824f04, 0x0000000d0b50bbdb],
    [0x1138125e44f6f1ed, 0x007194626a8ea08f, 0x000000155f4c650a],
    [0x0518c8b9ec85c694, 0x90d8a0e219b92b8d, 0x00000002542655df],
    [0x27bdd1deecab3a2a, 0xd2e38eb9cf5f0d31, 0x00000016402a77af],
    [0x683fbc279a15bcf8, 0x3d3044d9442370ea, 0x0000000b22850b30],
    [0x9accf335eb2643fa, 0x93ba981bea225cf6, 0x0000000b3b44ff2f],
    [0x7389d23ba2b8136b, 0x2bc6cad7df60f17d, 0x0000000b13d069df],
    [0xf6435d9a7176ee4a, 0xa2660e3bada54186, 0x0000001628a23ee0],
    [0x0eea87fe130b93ae, 0xd826a287eba6296a, 0x000000167fdb76d0],
    [0x6c899b06f9745c46, 0x95524d7177eab632, 0x00000012d2b2b941],
    [0x7203621959c2531c, 0xae00c3ce6d1ccb26, 0x0000000f45118b2e],
    [0x8657c8e09d168a66, 0xf7d4283cc9b3b39b, 0x0000000ade53aee2],
    [0xdfd3ed687edee7e5, 0x9ecdb7a6af3dc41b, 0x000000170af51273],
    [0x1f6e25a516075496, 0x37922da122187bd1, 0x0000001aeb822c62],
    [0x9b1734490c4543e4, 0xedcb4c2affbe4dbc, 0x00000016de319e4c],
    [0x9906fbff06c8b682, 0x24e8a231648a7762, 0x00000011e9519a7c],
    [0xe0d19227f257b431, 0x83dd5e24ccc87706, 0x0000001ce791c672],
    [0x7e358482b6f5d4e9, 0xc99e6d9c5ddef826, 0x0000001aa9a1b3e9],
    [0x115bdc51a19b6831, 0xfc303d64160ca152, 0x00000018a16e45a7],
    [0xd53272047993a142, 0x0fbb262ceca95ebb, 0x000000094f4c6029],
    [0x6cadb0e78bbba055, 0xfdb0d975ebe116d9, 0x000000098f73feca],
    [0xd615011411acf15e, 0x89e3d1cb76def802, 0x0000001175cf8aae],
    [0xd8ff539c2b057b35, 0xdc557115c8bddcce, 0x0000000ad5eb2d33],
    [0xc1d55ea38fd0ff69, 0x7799b48050ac9916, 0x0000000c13232851],
    [0xfd36be11b4d68be2, 0x70358ec48728bc1c, 0x00000012f7d2a76f],
    [0x9d4e33fe5abec3b8, 0x7006c481fc3ad089, 0x00000019f23dc6a9],
    [0x9af341777cb0b90c, 0x8261da7792963d26, 0x00000009a5dfa5c1],
    [0xdd4605587922ab53, 0x311928233b2fbcaf, 0x0000000f40a8ad18],
    [0xdb5babec58cc92ca, 0x1d8167e7b4ad03f3, 0x00000005a1f16c20],
    [0x3a4d0ef61086d4d9, 0x0403648e195e80db, 0x000000077a37ea13],
    [0x83a32d343cd5c6ec, 0xeaac2a909bfdd0ce, 0x000000046d6c3361],
    [0xfd1d15728d67ee4e, 0xc88770e57b54bf72, 0x00000016cc4a1c8c],
    [0x406c68054939278c, 0xac8dcc6b8a92b329, 0x00000002f9f1eeb9],
    [0x55226446255ccd46, 0xa4ee06e20a084a05, 0x0000000d6da3fd91],
    [0x9fee369da0afc0a9, 0x0db84df64c3c58f9, 0x000000041badfeea],
    [0x25f38beb507ba2df, 0x17401cf6ac3b1415, 0x00000018b14969aa],
    [0x9382966ad7c79de4, 0xdcefdd119250a5b3, 0x00000009cccef996],
    [0x26b11dbbdac188b1, 0x4dba7827b3c5879e, 0x0000000552be3a93],
    [0xefe26d89b7fcfd27, 0x911ffeeee510e2ed, 0x000000047e95f732],
    [0x4caea7b5e02919e5, 0xa9a93134ac7b3cbd, 0x0000000bc6059383],
    [0x9e67d491bf9b9321, 0x3e43b93b6879c039, 0x00000000da50f1fe],
    [0x64911fafa645de0c, 0x8ef9c8fafbd8af71, 0x0000001d64aead8f],
    [0x0dfcb967473e5021, 0xd79c7b81a6d36af5, 0x000000039f5bda65],
    [0xbfd7b62ae098f601, 0xa6e56277a40905cb, 0x00000017b64520ba],
    [0xad4c31eebd4c86c6, 0xce792932905ae41f, 0x0000000da7ed8b5f],
    [0x2ea4e476fb4cf807, 0x0a31af283fffce16, 0x000000164e83ba4d],
    [0xf7c3cbc157c3671c, 0xd92c36e0eeb590a6, 0x00000011efee5f4c],
    [0xa04f638f90f218be, 0xbda0edeac3aeeb3e, 0x00000011e484789b],
    [0x9f5445b5ab0a2cc3, 0x360e45d8f83e2632, 0x00000006757a0d45],
    [0x4cb59565c14d8ae8, 0x48d8dc11af50367b, 0x000000101d4e6b56],
    [0x9aa57230372b1000, 0x93b0e7247bd74931, 0x0000001416f5e2a7],
    [0x59d2281f9aa00000, 0x0adfe718563c4cde, 0x0000000936f7d83a],
    [0x3f4ed44240000000, 0x4cdcfa09111cea8b, 0x0000000d8399f188],
    [0x2816c68000000000, 0xddb11cf4006d204b, 0x00000001eebbb734],
    [0xe1a1000000000000, 0x67b9f06cdaeeab14, 0x0000000c4f0ee525],
    [0x0a00000000000000, 0x6fa699c10d8e4fe3, 0x00000008b585c41c],
    [0x0000000000000000, 0x719448b7aceb29e4, 0x000000069eecffc1],
    [0x0000000000000000, 0x14b926904e35e800, 0x0000000f3cbf2395],
    [0x0000000000000000, 0x8d43569c19100000, 0x00000004e885c59e],
    [0x0000000000000000, 0x3604ef66a0000000, 0x000000071d079aef],
    [0x0000000000000000, 0x8f833a4000000000, 0x00000019e4b162c4],
    [0x0000000000000000, 0x5676800000000000, 0x0000000ff687ac9b],
    [0x0000000000000000, 0x8100000000000000, 0x000000065d74e502],
    [0x0000000000000000, 0x0000000000000000, 0x00000000953e93ca],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x000000000002841e, 0x0000000000000000, 0x0000000000000000],
    [0x000095f83d0a1fb7, 0x0000000000000000, 0x0000000000000000],
    [0xe3bbed90270686b5, 0x00000000000022ea, 0x0000000000000000],
    [0x6b29b9c3b29620e3, 0x000008213f56a67f, 0x0000000000000000],
    [0xc67672ce7919d87c, 0x94034e79e5b99f78, 0x00000000000001e4],
    [0x1cb4b9ff04f8f3f8, 0xe93228af3c39fc50, 0x000000176aed29dd],
    [0x445197e92c24304f, 0x7065dd8dffe6223c, 0x00000015dd86f18e],
    [0x814ee1bbc309313b, 0x6238064013037500, 0x000000035ca27c07],
    [0x4f0499c565dd6aef, 0xbbdbcb0c3a6d5d82, 0x00000001b819d2a4],
    [0xa08f1138125e44f7, 0x650a007194626a8e, 0x000000088d81a63f],
    [0x2b8d0518c8b9ec86, 0x55df90d8a0e219b9, 0x0000000ec29e1bd8],
    [0x0d3127bdd1deecac, 0x77afd2e38eb9cf5f, 0x000000149133e2a1],
    [0x70ea683fbc279a16, 0x0b303d3044d94423, 0x00000007cad1edd0],
    [0x5cf69accf335eb27, 0xff2f93ba981bea22, 0x00000012a2fa01f2],
    [0xf17d7389d23ba2b9, 0x69df2bc6cad7df60, 0x0000001ac6583706],
    [0x4186f6435d9a7177, 0x3ee0a2660e3bada5, 0x000000017e472ee1],
    [0x296a0eea87fe130c, 0x76d0d826a287eba6, 0x00000016a44a542c],
    [0xb6326c899b06f975, 0xb94195524d7177ea, 0x0000000a5a44b133],
    [0xcb267203621959c3, 0x8b2eae00c3ce6d1c, 0x0000000c0af85f0b],
    [0xb39b8657c8e09d17, 0xaee2f7d4283cc9b3, 0x00000002b00e9801],
    [0xc41bdfd3ed687edf, 0x12739ecdb7a6af3d, 0x000000006452d7a6],
    [0x7bd11f6e25a51608, 0x2c6237922da12218, 0x00000008dd45c9b6],
    [0x4dbc9b1734490c46, 0x9e4cedcb4c2affbe, 0x0000000c9cfc14e9],
    [0x77629906fbff06c9, 0x9a7c24e8a231648a, 0x0000001897584bfd],
    [0x7706e0d19227f258, 0xc67283dd5e24ccc8, 0x0000001d3e8ca715],
    [0xf8267e358482b6f6, 0xb3e9c99e6d9c5dde, 0x0000000511e6f3dd],
    [0xa152115bdc51a19c, 0x45a7fc303d64160c, 0x00000015d11f0c11],
    [0x5ebbd53272047994, 0x60290fbb262ceca9, 0x00000004057f3f23],
    [0x16d96cadb0e78bbc, 0xfecafdb0d975ebe1, 0x000000083c8d3933],
    [0xf802d615011411ad, 0x8aae89e3d1cb76de, 0x0000000c1b2915a0],
    [0xdcced8ff539c2b06, 0x2d33dc557115c8bd, 0x0000000793a35434],
    [0x9916c1d55ea38fd1, 0x28517799b48050ac, 0x0000000c25f750a5],
    [0xbc1cfd36be11b4d7, 0xa76f70358ec48728, 0x00000008a6c25962],
    [0xd0899d4e33fe5abf, 0xc6a97006c481fc3a, 0x00000016f83d4003],
    [0x3d269af341777cb1, 0xa5c18261da779296, 0x00000000e1118980],
    [0xbcafdd4605587923, 0xad18311928233b2f, 0x000000002697d23f],
    [0x03f3db5babec58cd, 0x6c201d8167e7b4ad, 0x0000000ed364f273],
    [0x80db3a4d0ef61087, 0xea130403648e195e, 0x0000001adfb5856f],
    [0xd0ce83a32d343cd6, 0x3361eaac2a909bfd, 0x0000001a0e9d8010],
    [0xbf72fd1d15728d68, 0x1c8cc88770e57b54, 0x00000003c5a34288],
    [0xb329406c6805493a, 0xeeb9ac8dcc6b8a92, 0x00000001e37c056e],
    [0x4a0555226446255d, 0xfd91a4ee06e20a08, 0x00000019d417eed4],
    [0x58f99fee369da0b0, 0xfeea0db84df64c3c, 0x00000013c9d42ab4],
    [0x141525f38beb507c, 0x69aa17401cf6ac3b, 0x0000000c56cb1b1a],
    [0xa5b39382966ad7c8, 0xf996dcefdd119250, 0x0000000626529b0d],
    [0x879e26b11dbbdac2, 0x3a934dba7827b3c5, 0x0000000340f8f09d],
    [0xe2edefe26d89b7fd, 0xf732911ffeeee510, 0x00000006ce2c3fbe],
    [0x3cbd4caea7b5e02a, 0x9383a9a93134ac7b, 0x0000000ea90b0aeb],
    [0xc0399e67d491bf9c, 0xf1fe3e43b93b6879, 0x000000190c0af7b3],
    [0xaf7164911fafa646, 0xad8f8ef9c8fafbd8, 0x0000000c182e283d],
    [0x6af50dfcb967473f, 0xda65d79c7b81a6d3, 0x0000000e5c4b2942],
    [0x05cbbfd7b62ae099, 0x20baa6e56277a409, 0x0000000f90c19a49],
    [0xe41fad4c31eebd4d, 0x8b5fce792932905a, 0x0000001106c26892],
    [0xce162ea4e476fb4d, 0xba4d0a31af283fff, 0x0000000451558e31],
    [0x90a6f7c3cbc157c4, 0x5f4cd92c36e0eeb5, 0x0000000b940110b2],
    [0xeb3ea04f638f90f3, 0x789bbda0edeac3ae, 0x0000000bba6bc97a],
    [0x26329f5445b5ab0b, 0x0d45360e45d8f83e, 0x0000001c83d9158f],
    [0x367b4cb59565c14e, 0x6b5648d8dc11af50, 0x000000038128cf90],
    [0x49319aa57230372c, 0xe2a793b0e7247bd7, 0x00000003d2aa6963],
    [0x4cde59d2281f9aa0, 0xd83a0adfe718563c, 0x0000001741a1c8b0],
    [0xea8b3f4ed4424000, 0xf1884cdcfa09111c, 0x0000000b5f5dfe09],
    [0x204b2816c6800000, 0xb734ddb11cf4006d, 0x0000000250ad8e4a],
    [0xab14e1a100000000, 0xe52567b9f06cdaee, 0x0000001165665974],
    [0x4fe30a0000000000, 0xc41c6fa699c10d8e, 0x0000001b377db437],
    [0x29e4000000000000, 0xffc1719448b7aceb, 0x0000000cfbea8794],
    [0xe800000000000000, 0x239514b926904e35, 0x00000004e3a4015a],
    [0x0000000000000000, 0xc59e8d43569c1910, 0x00000014fcb3e388],
    [0x0000000000000000, 0x9aef3604ef66a000, 0x000000020ad957de],
    [0x0000000000000000, 0x62c48f833a400000, 0x0000001606e8fb9a],
    [0x0000000000000000, 0xac9b567680000000, 0x0000000624b78940],
    [0x0000000000000000, 0xe502810000000000, 0x0000000f0ee2aa91],
    [0x0000000000000000, 0x93ca000000000000, 0x000000042a9975f0],
    [0x0000000000000000, 0x6400000000000000, 0x0000001a36214a21],
    [0x0000000000000000, 0x0000000000000000, 0x00000007c63c80e8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x0000000000000003, 0x0000000000000000, 0x0000000000000000],
    [0x0000000095f83d0b, 0x0000000000000000, 0x0000000000000000],
    [0x22eae3bbed902707, 0x0000000000000000, 0x0000000000000000],
    [0xa67f6b29b9c3b297, 0x0000000008213f56, 0x0000000000000000],
    [0x9f78c67672ce791a, 0x01e494034e79e5b9, 0x0000000000000000],
    [0xfc501cb4b9ff04f9, 0x29dde93228af3c39, 0x000000000070d31c],
    [0x223c445197e92c25, 0xf18e7065dd8dffe6, 0x000000068ead8d45],
    [0x7500814ee1bbc30a, 0x7c07623806401303, 0x0000001048f65431],
    [0x5d824f0499c565de, 0xd2a4bbdbcb0c3a6d, 0x0000000b85815bf1],
    [0x6a8ea08f1138125f, 0xa63f650a00719462, 0x0000001a805e7e9a],
    [0x19b92b8d0518c8ba, 0x1bd855df90d8a0e2, 0x00000006346da59a],
    [0xcf5f0d3127bdd1df, 0xe2a177afd2e38eb9, 0x00000006143435e6],
    [0x442370ea683fbc28, 0xedd00b303d3044d9, 0x00000017f470ba8a],
    [0xea225cf69accf336, 0x01f2ff2f93ba981b, 0x000000028b6aa161],
    [0xdf60f17d7389d23c, 0x370669df2bc6cad7, 0x00000016961ab887],
    [0xada54186f6435d9b, 0x2ee13ee0a2660e3b, 0x00000001ae0b45ad],
    [0xeba6296a0eea87ff, 0x542c76d0d826a287, 0x0000000a851fc3fb],
    [0x77eab6326c899b07, 0xb133b94195524d71, 0x0000001cb6f8328c],
    [0x6d1ccb267203621a, 0x5f0b8b2eae00c3ce, 0x00000002f48388a2],
    [0xc9b3b39b8657c8e1, 0x9801aee2f7d4283c, 0x0000000800aff504],
    [0xaf3dc41bdfd3ed69, 0xd7a612739ecdb7a6, 0x0000000111cf7442],
    [0x22187bd11f6e25a6, 0xc9b62c6237922da1, 0x0000000f901dbe50],
    [0xffbe4dbc9b17344a, 0x14e99e4cedcb4c2a, 0x00000012cf5612fb],
    [0x648a77629906fc00, 0x4bfd9a7c24e8a231, 0x0000001ca83d8a85],
    [0xccc87706e0d19228, 0xa715c67283dd5e24, 0x000000013bb7571f],
    [0x5ddef8267e358483, 0xf3ddb3e9c99e6d9c, 0x000000075ea581ac],
    [0x160ca152115bdc52, 0x0c1145a7fc303d64, 0x0000000a77624442],
    [0xeca95ebbd5327205, 0x3f2360290fbb262c, 0x0000000f60b75af7],
    [0xebe116d96cadb0e8, 0x3933fecafdb0d975, 0x0000001bc3a73a43],
    [0x76def802d6150115, 0x15a08aae89e3d1cb, 0x0000000fa6d47023],
    [0xc8bddcced8ff539d, 0x54342d33dc557115, 0x000000082b32b19a],
    [0x50ac9916c1d55ea4, 0x50a528517799b480, 0x000000062153743f],
    [0x8728bc1cfd36be12, 0x5962a76f70358ec4, 0x0000000ebdde8947],
    [0xfc3ad0899d4e33ff, 0x4003c6a97006c481, 0x000000109cbdce77],
    [0x92963d269af34178, 0x8980a5c18261da77, 0x0000001bc3db7991],
    [0x3b2fbcafdd460559, 0xd23fad1831192823, 0x00000004154b3416],
    [0xb4ad03f3db5babed, 0xf2736c201d8167e7, 0x0000000550412918],
    [0x195e80db3a4d0ef7, 0x856fea130403648e, 0x00000005cef622a9],
    [0x9bfdd0ce83a32d35, 0x80103361eaac2a90, 0x00000009aadbd38f],
    [0x7b54bf72fd1d1573, 0x42881c8cc88770e5, 0x000000039be300a3],
    [0x8a92b329406c6806, 0x056eeeb9ac8dcc6b, 0x0000000835a736f5],
    [0x0a084a0555226447, 0xeed4fd91a4ee06e2, 0x0000001b3f022c09],
    [0x4c3c58f99fee369e, 0x2ab4feea0db84df6, 0x00000002500c9905],
    [0xac3b141525f38bec, 0x1b1a69aa17401cf6, 0x0000000133f77b54],
    [0x9250a5b39382966b, 0x9b0df996dcefdd11, 0x000000139519c1a0],
    [0xb3c5879e26b11dbc, 0xf09d3a934dba7827, 0x0000000797733946],
    [0xe510e2edefe26d8a, 0x3fbef732911ffeee, 0x000000108458f4f1],
    [0xac7b3cbd4caea7b6, 0x0aeb9383a9a93134, 0x0000001a5e2ab826],
    [0x6879c0399e67d492, 0xf7b3f1fe3e43b93b, 0x00000008db84e153],
    [0xfbd8af7164911fb0, 0x283dad8f8ef9c8fa, 0x000000138cdbbc79],
    [0xa6d36af50dfcb968, 0x2942da65d79c7b81, 0x0000001c358805db],
    [0xa40905cbbfd7b62b, 0x9a4920baa6e56277, 0x0000001539a1291b],
    [0x905ae41fad4c31ef, 0x68928b5fce792932, 0x000000066d3f7246],
    [0x3fffce162ea4e477, 0x8e31ba4d0a31af28, 0x0000001064ac3cca],
    [0xeeb590a6f7c3cbc2, 0x10b25f4cd92c36e0, 0x000000115bd9d40d],
    [0xc3aeeb3ea04f6390, 0xc97a789bbda0edea, 0x000000030abf7670],
    [0xf83e26329f5445b6, 0x158f0d45360e45d8, 0x0000001a42a16c73],
    [0xaf50367b4cb59566, 0xcf906b5648d8dc11, 0x0000001acb8dbf1f],
    [0x7bd749319aa57231, 0x6963e2a793b0e724, 0x0000000768123f65],
    [0x563c4cde59d22820, 0xc8b0d83a0adfe718, 0x000000179c9b707b],
    [0x111cea8b3f4ed443, 0xfe09f1884cdcfa09, 0x0000001cd2192892],
    [0x006d204b2816c680, 0x8e4ab734ddb11cf4, 0x000000046c081919],
    [0xdaeeab14e1a10000, 0x5974e52567b9f06c, 0x00000005f33efb72],
    [0x0d8e4fe30a000000, 0xb437c41c6fa699c1, 0x0000001a9fc1fbb7],
    [0xaceb29e400000000, 0x8794ffc1719448b7, 0x0000000cf83737f2],
    [0x4e35e80000000000, 0x015a239514b92690, 0x0000001aaa7f458f],
    [0x1910000000000000, 0xe388c59e8d43569c, 0x000000037e626d7d],
    [0xa000000000000000, 0x57de9aef3604ef66, 0x0000001d4f8ebb5c],
    [0x0000000000000000, 0xfb9a62c48f833a40, 0x00000015801606f3],
    [0x0000000000000000, 0x8940ac9b56768000, 0x0000001b011d742a],
    [0x0000000000000000, 0xaa91e50281000000, 0x00000009e75a08fc],
    [0x0000000000000000, 0x75f093ca00000000, 0x0000001d06b09a22],
    [0x0000000000000000, 0x4a21640000000000, 0x00000008060495d8],
    [0x0000000000000000, 0x80e8000000000000, 0x000000148e77f4a0],
    [0x0000000000000000, 0x1000000000000000, 0x00000007915ca947],
    [0x0000000000000000, 0x0000000000000000, 0x000000108ba7b2a0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x00000000000095f9, 0x0000000000000000, 0x0000000000000000],
    [0x000022eae3bbed91, 0x0000000000000000, 0x0000000000000000],
    [0x3f56a67f6b29b9c4, 0x0000000000000821, 0x0000000000000000],
    [0xe5b99f78c67672cf, 0x000001e494034e79, 0x0000000000000000],
    [0x3c39fc501cb4ba00, 0xd31c29dde93228af, 0x0000000000000070],
    [0xffe6223c445197ea, 0x8d45f18e7065dd8d, 0x0000001a44df832b],
    [0x13037500814ee1bc, 0x54317c0762380640, 0x0000000a23e47838],
    [0x3a6d5d824f0499c6, 0x5bf1d2a4bbdbcb0c, 0x0000000d1d767fc9],
    [0x94626a8ea08f1139, 0x7e9aa63f650a0071, 0x00000011148bed91],
    [0xa0e219b92b8d0519, 0xa59a1bd855df90d8, 0x0000000412c19b3e],
    [0x8eb9cf5f0d3127be, 0x35e6e2a177afd2e3, 0x0000000e960b91cb],
    [0x44d9442370ea6840, 0xba8aedd00b303d30, 0x0000001182e5fba7],
    [0x981bea225cf69acd, 0xa16101f2ff2f93ba, 0x0000000940039593],
    [0xcad7df60f17d738a, 0xb887370669df2bc6, 0x00000004920fed24],
    [0x0e3bada54186f644, 0x45ad2ee13ee0a266, 0x000000088cbb24a0],
    [0xa287eba6296a0eeb, 0xc3fb542c76d0d826, 0x0000000783924af6],
    [0x4d7177eab6326c8a, 0x328cb133b9419552, 0x0000001ba6fa883b],
    [0xc3ce6d1ccb267204, 0x88a25f0b8b2eae00, 0x0000000dc8718b5c],
    [0x283cc9b3b39b8658, 0xf5049801aee2f7d4, 0x000000158b70a164],
    [0xb7a6af3dc41bdfd4, 0x7442d7a612739ecd, 0x0000001781831d21],
    [0x2da122187bd11f6f, 0xbe50c9b62c623792, 0x00000007ca05bda5],
    [0x4c2affbe4dbc9b18, 0x12fb14e99e4cedcb, 0x00000008c9aee342],
    [0xa231648a77629907, 0x8a854bfd9a7c24e8, 0x0000000f62536bd6],
    [0x5e24ccc87706e0d2, 0x571fa715c67283dd, 0x0000001426405600],
    [0x6d9c5ddef8267e36, 0x81acf3ddb3e9c99e, 0x000000001448f94b],
    [0x3d64160ca152115c, 0x44420c1145a7fc30, 0x00000011948a7291],
    [0x262ceca95ebbd533, 0x5af73f2360290fbb, 0x00000004052be85f],
    [0xd975ebe116d96cae, 0x3a433933fecafdb0, 0x00000016339ef210],
    [0xd1cb76def802d616, 0x702315a08aae89e3, 0x00000003c73d5898],
    [0x7115c8bddcced900, 0xb19a54342d33dc55, 0x00000005b09ed392],
    [0xb48050ac9916c1d6, 0x743f50a528517799, 0x000000045a3c2862],
    [0x8ec48728bc1cfd37, 0x89475962a76f7035, 0x00000016ec523566],
    [0xc481fc3ad0899d4f, 0xce774003c6a97006, 0x00000017dfa2eed7],
    [0xda7792963d269af4, 0x79918980a5c18261, 0x0000001471acf867],
    [0x28233b2fbcafdd47, 0x3416d23fad183119, 0x000000181795522a],
    [0x67e7b4ad03f3db5c, 0x2918f2736c201d81, 0x00000009d385e549],
    [0x648e195e80db3a4e, 0x22a9856fea130403, 0x0000001108b53350],
    [0x2a909bfdd0ce83a4, 0xd38f80103361eaac, 0x00000012a8712714],
    [0x70e57b54bf72fd1e, 0x00a342881c8cc887, 0x00000004d959c5c6],
    [0xcc6b8a92b329406d, 0x36f5056eeeb9ac8d, 0x000000104c793f0c],
    [0x06e20a084a055523, 0x2c09eed4fd91a4ee, 0x00000002d80d2b03],
    [0x4df64c3c58f99fef, 0x99052ab4feea0db8, 0x00000000bd1148c4],
    [0x1cf6ac3b141525f4, 0x7b541b1a69aa1740, 0x0000000ff8be5eb1],
    [0xdd119250a5b39383, 0xc1a09b0df996dcef, 0x0000000b85579e27],
    [0x7827b3c5879e26b2, 0x3946f09d3a934dba, 0x0000000941a9dd22],
    [0xfeeee510e2edefe3, 0xf4f13fbef732911f, 0x00000007f7e4cf52],
    [0x3134ac7b3cbd4caf, 0xb8260aeb9383a9a9, 0x00000013509c6817],
    [0xb93b6879c0399e68, 0xe153f7b3f1fe3e43, 0x0000000585c842b4],
    [0xc8fafbd8af716492, 0xbc79283dad8f8ef9, 0x0000000c4fe7a065],
    [0x7b81a6d36af50dfd, 0x05db2942da65d79c, 0x00000017aff393e0],
    [0x6277a40905cbbfd8, 0x291b9a4920baa6e5, 0x000000165b68ccf8],
    [0x2932905ae41fad4d, 0x724668928b5fce79, 0x0000001bfa20e799],
    [0xaf283fffce162ea5, 0x3cca8e31ba4d0a31, 0x00000005ecb90ca0],
    [0x36e0eeb590a6f7c4, 0xd40d10b25f4cd92c, 0x000000078180b096],
    [0xedeac3aeeb3ea050, 0x7670c97a789bbda0, 0x0000000550ac9607],
    [0x45d8f83e26329f55, 0x6c73158f0d45360e, 0x00000001bccf21bd],
    [0xdc11af50367b4cb6, 0xbf1fcf906b5648d8, 0x0000000e4d223ac5],
    [0xe7247bd749319aa6, 0x3f656963e2a793b0, 0x000000103d3856c8],
    [0xe718563c4cde59d3, 0x707bc8b0d83a0adf, 0x00000010d24b8451],
    [0xfa09111cea8b3f4f, 0x2892fe09f1884cdc, 0x00000012f62a7479],
    [0x1cf4006d204b2817, 0x19198e4ab734ddb1, 0x0000001c359be2fd],
    [0xf06cdaeeab14e1a1, 0xfb725974e52567b9, 0x0000001d206cb2f8],
    [0x99c10d8e4fe30a00, 0xfbb7b437c41c6fa6, 0x0000001c2b1a13cf],
    [0x48b7aceb29e40000, 0x37f28794ffc17194, 0x000000129f5fdfaa],
    [0x26904e35e8000000, 0x458f015a239514b9, 0x00000009d46bdd4a],
    [0x569c191000000000, 0x6d7de388c59e8d43, 0x000000114af06839],
    [0xef66a00000000000, 0xbb5c57de9aef3604, 0x0000000d5ef53190],
    [0x3a40000000000000, 0x06f3fb9a62c48f83, 0x00000003e54c31a4],
    [0x8000000000000000, 0x742a8940ac9b5676, 0x000000086362d73e],
    [0x0000000000000000, 0x08fcaa91e5028100, 0x0000000e8a88f6e2],
    [0x0000000000000000, 0x9a2275f093ca0000, 0x00000016d358fe65],
    [0x0000000000000000, 0x95d84a2164000000, 0x00000017a7f4d588],
    [0x0000000000000000, 0xf4a080e800000000, 0x00000001ffb9c36e],
    [0x0000000000000000, 0xa947100000000000, 0x00000019d577b349],
    [0x0000000000000000, 0xb2a0000000000000, 0x00000011268d5501],
    [0x0000000000000000, 0x4000000000000000, 0x000000006531ab32],
    [0x0000000000000000, 0x0000000000000000, 0x0000000bb3222680],
    [0x0000000022eae3bc, 0x0000000000000000, 0x0000000000000000],
    [0x08213f56a67f6b2a, 0x0000000000000000, 0x0000000000000000],
    [0x4e79e5b99f78c677, 0x0000000001e49403, 0x0000000000000000],
    [0x28af3c39fc501cb5, 0x0070d31c29dde932, 0x0000000000000000],
    [0xdd8dffe6223c4452, 0x832b8d45f18e7065, 0x00000000001a44df],
    [0x064013037500814f, 0x783854317c076238, 0x000000163cfb4f42],
    [0xcb0c3a6d5d824f05, 0x7fc95bf1d2a4bbdb, 0x0000000f79e5c026],
    [0x007194626a8ea090, 0xed917e9aa63f650a, 0x00000008f6baa826],
    [0x90d8a0e219b92b8e, 0x9b3ea59a1bd855df, 0x00000009104a2928],
    [0xd2e38eb9cf5f0d32, 0x91cb35e6e2a177af, 0x000000097454de59],
    [0x3d3044d9442370eb, 0xfba7ba8aedd00b30, 0x00000014dac236b4],
    [0x93ba981bea225cf7, 0x9593a16101f2ff2f, 0x0000000c5608d976],
    [0x2bc6cad7df60f17e, 0xed24b887370669df, 0x0000001b9c2c9306],
    [0xa2660e3bada54187, 0x24a045ad2ee13ee0, 0x000000019cd795bd],
    [0xd826a287eba6296b, 0x4af6c3fb542c76d0, 0x0000000e3c69375f],
    [0x95524d7177eab633, 0x883b328cb133b941, 0x000000162fe528c3],
    [0xae00c3ce6d1ccb27, 0x8b5c88a25f0b8b2e, 0x0000000fb93ae1c1],
    [0xf7d4283cc9b3b39c, 0xa164f5049801aee2, 0x0000000f42bfe11e],
    [0x9ecdb7a6af3dc41c, 0x1d217442d7a61273, 0x0000000721b7868d],
    [0x37922da122187bd2, 0xbda5be50c9b62c62, 0x000000030da494e7],
    [0xedcb4c2affbe4dbd, 0xe34212fb14e99e4c, 0x00000018276f2435],
    [0x24e8a231648a7763, 0x6bd68a854bfd9a7c, 0x0000000c8bf57571],
    [0x83dd5e24ccc87707, 0x5600571fa715c672, 0x0000001a686ed013],
    [0xc99e6d9c5ddef827, 0xf94b81acf3ddb3e9, 0x0000000480831224],
    [0xfc303d64160ca153, 0x729144420c1145a7, 0x000000089bcf8b04],
    [0x0fbb262ceca95ebc, 0xe85f5af73f236029, 0x000000010917e884],
    [0xfdb0d975ebe116da, 0xf2103a433933feca, 0x000000012485a2ae],
    [0x89e3d1cb76def803, 0x5898702315a08aae, 0x0000000aee2c6631],
    [0xdc557115c8bddccf, 0xd392b19a54342d33, 0x0000000b7d415d73],
    [0x7799b48050ac9917, 0x2862743f50a52851, 0x0000001af7cb7a1f],
    [0x70358ec48728bc1d, 0x356689475962a76f, 0x00000007412591e2],
    [0x7006c481fc3ad08a, 0xeed7ce774003c6a9, 0x00000016ddb03f74],
    [0x8261da7792963d27, 0xf86779918980a5c1, 0x0000001b39bfaedd],
    [0x311928233b2fbcb0, 0x522a3416d23fad18, 0x00000015e1116d45],
    [0x1d8167e7b4ad03f4, 0xe5492918f2736c20, 0x0000001023d9da39],
    [0x0403648e195e80dc, 0x335022a9856fea13, 0x0000000d7ad97967],
    [0xeaac2a909bfdd0cf, 0x2714d38f80103361, 0x000000180739c4af],
    [0xc88770e57b54bf73, 0xc5c600a342881c8c, 0x0000000afa84841f],
    [0xac8dcc6b8a92b32a, 0x3f0c36f5056eeeb9, 0x0000000765caad50],
    [0xa4ee06e20a084a06, 0x2b032c09eed4fd91, 0x00000012af0d0fc3],
    [0x0db84df64c3c58fa, 0x48c499052ab4feea, 0x0000000fa3869aff],
    [0x17401cf6ac3b1416, 0x5eb17b541b1a69aa, 0x0000001da2bb84f3],
    [0xdcefdd119250a5b4, 0x9e27c1a09b0df996, 0x0000001adc94e6e8],
    [0x4dba7827b3c5879f, 0xdd223946f09d3a93, 0x000000185bb4da55],
    [0x911ffeeee510e2ee, 0xcf52f4f13fbef732, 0x00000013fde1aa46],
    [0xa9a93134ac7b3cbe, 0x6817b8260aeb9383, 0x000000107c98b5f2],
    [0x3e43b93b6879c03a, 0x42b4e153f7b3f1fe, 0x0000001aa32a5bd8],
    [0x8ef9c8fafbd8af72, 0xa065bc79283dad8f, 0x000000148cbd7560],
    [0xd79c7b81a6d36af6, 0x93e005db2942da65, 0x000000167f642e33],
    [0xa6e56277a40905cc, 0xccf8291b9a4920ba, 0x0000000c024448cb],
    [0xce792932905ae420, 0xe799724668928b5f, 0x00000011a6124e7d],
    [0x0a31af283fffce17, 0x0ca03cca8e31ba4d, 0x0000001d50810864],
    [0xd92c36e0eeb590a7, 0xb096d40d10b25f4c, 0x000000174b67785d],
    [0xbda0edeac3aeeb3f, 0x96077670c97a789b, 0x00000015d058eaf1],
    [0x360e45d8f83e2633, 0x21bd6c73158f0d45, 0x0000001a7241992b],
    [0x48d8dc11af50367c, 0x3ac5bf1fcf906b56, 0x0000000a0adafc91],
    [0x93b0e7247bd74932, 0x56c83f656963e2a7, 0x0000000402f68661],
    [0x0adfe718563c4cdf, 0x8451707bc8b0d83a, 0x00000016a9db298c],
    [0x4cdcfa09111cea8c, 0x74792892fe09f188, 0x00000002ea103e52],
    [0xddb11cf4006d204c, 0xe2fd19198e4ab734, 0x0000001332b30d23],
    [0x67b9f06cdaeeab15, 0xb2f8fb725974e525, 0x000000085b033225],
    [0x6fa699c10d8e4fe4, 0x13cffbb7b437c41c, 0x00000008c70acaf3],
    [0x719448b7aceb29e4, 0xdfaa37f28794ffc1, 0x0000001acb25a7c2],
    [0x14b926904e35e800, 0xdd4a458f015a2395, 0x0000000f91fb8bc6],
    [0x8d43569c19100000, 0x68396d7de388c59e, 0x000000107fd92752],
    [0x3604ef66a0000000, 0x3190bb5c57de9aef, 0x000000132fd8f505],
    [0x8f833a4000000000, 0x31a406f3fb9a62c4, 0x000000013590455b],
    [0x5676800000000000, 0xd73e742a8940ac9b, 0x000000153b949f71],
    [0x8100000000000000, 0xf6e208fcaa91e502, 0x0000001a8170b42e],
    [0x0000000000000000, 0xfe659a2275f093ca, 0x0000000aef4baad9],
    [0x0000000000000000, 0xd58895d84a216400, 0x00000014f40b7660],
    [0x0000000000000000, 0xc36ef4a080e80000, 0x000000168bc35730],
    [0x0000000000000000, 0xb349a94710000000, 0x0000000b5a869d55],
    [0x0000000000000000, 0x5501b2a000000000, 0x00000013f42373cb],
    [0x0000000000000000, 0xab32400000000000, 0x000000118a23f843],
    [0x0000000000000000, 0x2680000000000000, 0x0000000fc15ef610],
    [0x0000000000000000, 0x0000000000000000, 0x00000003c2a36761],
    [0x0000000000000000, 0x0000000000000000, 0x0000001695a68a00],
    [0x00000000000022eb, 0x0000000000000000, 0x0000000000000000],
    [0x000008213f56a680, 0x0000000000000000, 0x0000000000000000],
    [0x94034e79e5b99f79, 0x00000000000001e4, 0x0000000000000000],
    [0xe93228af3c39fc51, 0x00000070d31c29dd, 0x0000000000000000],
    [0x7065dd8dffe6223d, 0x44df832b8d45f18e, 0x000000000000001a],
    [0x6238064013037501, 0x4f42783854317c07, 0x000000061dc1ac08],
    [0xbbdbcb0c3a6d5d83, 0xc0267fc95bf1d2a4, 0x00000001ef4a8e3b],
    [0x650a007194626a8f, 0xa826ed917e9aa63f, 0x0000000de9699c3a],
    [0x55df90d8a0e219ba, 0x29289b3ea59a1bd8, 0x0000000da83868da],
    [0x77afd2e38eb9cf60, 0xde5991cb35e6e2a1, 0x00000014fe0042ae],
    [0x0b303d3044d94424, 0x36b4fba7ba8aedd0, 0x0000000ae99561ee],
    [0xff2f93ba981bea23, 0xd9769593a16101f2, 0x00000019a93f9609],
    [0x69df2bc6cad7df61, 0x9306ed24b8873706, 0x000000024b12eb66],
    [0x3ee0a2660e3bada6, 0x95bd24a045ad2ee1, 0x00000017e1e7fad5],
    [0x76d0d826a287eba7, 0x375f4af6c3fb542c, 0x00000013ed423360],
    [0xb94195524d7177eb, 0x28c3883b328cb133, 0x0000001666f0314b],
    [0x8b2eae00c3ce6d1d, 0xe1c18b5c88a25f0b, 0x000000117fd6e42f],
    [0xaee2f7d4283cc9b4, 0xe11ea164f5049801, 0x0000000b25fb31ae],
    [0x12739ecdb7a6af3e, 0x868d1d217442d7a6, 0x0000000aea3a7941],
    [0x2c6237922da12219, 0x94e7bda5be50c9b6, 0x0000000f41a12ac5],
    [0x9e4cedcb4c2affbf, 0x2435e34212fb14e9, 0x000000103363e39c],
    [0x9a7c24e8a231648b, 0x75716bd68a854bfd, 0x000000068d5c685d],
    [0xc67283dd5e24ccc9, 0xd0135600571fa715, 0x00000015c29388c0],
    [0xb3e9c99e6d9c5ddf, 0x1224f94b81acf3dd, 0x0000000f1724c4a3],
    [0x45a7fc303d64160d, 0x8b04729144420c11, 0x000000082a631c03],
    [0x60290fbb262cecaa, 0xe884e85f5af73f23, 0x00000000d32e72c5],
    [0xfecafdb0d975ebe2, 0xa2aef2103a433933, 0x0000001046dbaafa],
    [0x8aae89e3d1cb76df, 0x66315898702315a0, 0x0000001c8da4f365],
    [0x2d33dc557115c8be, 0x5d73d392b19a5434, 0x000000179bdcdbbd],
    [0x28517799b48050ad, 0x7a1f2862743f50a5, 0x0000000e49a4552d],
    [0xa76f70358ec48729, 0x91e2356689475962, 0x0000000a96a48769],
    [0xc6a97006c481fc3b, 0x3f74eed7ce774003, 0x000000189474317f],
    [0xa5c18261da779297, 0xaeddf86779918980, 0x0000001da0908775],
    [0xad18311928233b30, 0x6d45522a3416d23f, 0x0000001b667535c2],
    [0x6c201d8167e7b4ae, 0xda39e5492918f273, 0x0000000f77591fdb],
    [0xea130403648e195f, 0x7967335022a9856f, 0x0000001562d518dd],
    [0x3361eaac2a909bfe, 0xc4af2714d38f8010, 0x00000015c37f92b3],
    [0x1c8cc88770e57b55, 0x841fc5c600a34288, 0x0000000c0da18891],
    [0xeeb9ac8dcc6b8a93, 0xad503f0c36f5056e, 0x00000004140a9ff2],
    [0xfd91a4ee06e20a09, 0x0fc32b032c09eed4, 0x0000001ab3483d8f],
    [0xfeea0db84df64c3d, 0x9aff48c499052ab4, 0x0000000381bd58c1],
    [0x69aa17401cf6ac3c, 0x84f35eb17b541b1a, 0x0000000f4663d7a4],
    [0xf996dcefdd119251, 0xe6e89e27c1a09b0d, 0x0000000880b8e221],
    [0x3a934dba7827b3c6, 0xda55dd223946f09d, 0x00000007e4b74495],
    [0xf732911ffeeee511, 0xaa46cf52f4f13fbe, 0x0000000516885fe5],
    [0x9383a9a93134ac7c, 0xb5f26817b8260aeb, 0x00000017abb6f8bc],
    [0xf1fe3e43b93b687a, 0x5bd842b4e153f7b3, 0x0000000e22a43961],
    [0xad8f8ef9c8fafbd9, 0x7560a065bc79283d, 0x00000016ab08e9f0],
    [0xda65d79c7b81a6d4, 0x2e3393e005db2942, 0x0000001a2f0c9db6],
    [0x20baa6e56277a40a, 0x48cbccf8291b9a49, 0x0000000c9d686e90],
    [0x8b5fce792932905b, 0x4e7de79972466892, 0x00000003ca9f9c47],
    [0xba4d0a31af284000, 0x08640ca03cca8e31, 0x000000109a34800d],
    [0x5f4cd92c36e0eeb6, 0x785db096d40d10b2, 0x0000000308d063b7],
    [0x789bbda0edeac3af, 0xeaf196077670c97a, 0x0000000cea47c508],
    [0x0d45360e45d8f83f, 0x992b21bd6c73158f, 0x00000002138a0c4a],
    [0x6b5648d8dc11af51, 0xfc913ac5bf1fcf90, 0x000000115e67f194],
    [0xe2a793b0e7247bd8, 0x866156c83f656963, 0x00000004e2e5f733],
    [0xd83a0adfe718563d, 0x298c8451707bc8b0, 0x0000000bff1fed97],
    [0xf1884cdcfa09111d, 0x3e5274792892fe09, 0x000000056494a7cf],
    [0xb734ddb11cf4006e, 0x0d23e2fd19198e4a, 0x000000127347059f],
    [0xe52567b9f06cdaef, 0x3225b2f8fb725974, 0x000000073acdad45],
    [0xc41c6fa699c10d8f, 0xcaf313cffbb7b437, 0x000000101c65747e],
    [0xffc1719448b7acec, 0xa7c2dfaa37f28794, 0x0000001d857027ee],
    [0x239514b926904e36, 0x8bc6dd4a458f015a, 0x00000019c3922526],
    [0xc59e8d43569c1910, 0x275268396d7de388, 0x00000008f98554ec],
    [0x9aef3604ef66a000, 0xf5053190bb5c57de, 0x000000192e74fc9e],
    [0x62c48f833a400000, 0x455b31a406f3fb9a, 0x00000007353004e2],
    [0xac9b567680000000, 0x9f71d73e742a8940, 0x00000016e1674806],
    [0xe502810000000000, 0xb42ef6e208fcaa91, 0x000000018ac060e6],
    [0x93ca000000000000, 0xaad9fe659a2275f0, 0x00000017e9a04153],
    [0x6400000000000000, 0x7660d58895d84a21, 0x000000137af70994],
    [0x0000000000000000, 0x5730c36ef4a080e8, 0x00000004c3a7acdf],
    [0x0000000000000000, 0x9d55b349a9471000, 0x0000001632bdeb2c],
    [0x0000000000000000, 0x73cb5501b2a00000, 0x0000000a633c9a05],
    [0x0000000000000000, 0xf843ab3240000000, 0x0000000144fbd246],
    [0x0000000000000000, 0xf610268000000000, 0x000000108620f10e],
    [0x0000000000000000, 0x6761000000000000, 0x000000037bc18cbf],
    [0x0000000000000000, 0x8a00000000000000, 0x0000000ec32992ec],
    [0x0000000000000000, 0x0000000000000000, 0x00000019456ea8e4],
    [0x0000000000000000, 0x0000000000000000, 0x000000174876e800],
    [0x0000000008213f57, 0x0000000000000000, 0x0000000000000000],
    [0x01e494034e79e5ba, 0x0000000000000000, 0x0000000000000000],
    [0x29dde93228af3c3a, 0x000000000070d31c, 0x0000000000000000],
    [0xf18e7065dd8dffe7, 0x001a44df832b8d45, 0x0000000000000000],
    [0x7c07623806401304, 0xac084f4278385431, 0x0000000000061dc1],
    [0xd2a4bbdbcb0c3a6e, 0x8e3bc0267fc95bf1, 0x0000000f4a5b3902],
    [0xa63f650a00719463, 0x9c3aa826ed917e9a, 0x0000000098535975],
    [0x1bd855df90d8a0e3, 0x68da29289b3ea59a, 0x0000001b621e4d50],
    [0xe2a177afd2e38eba, 0x42aede5991cb35e6, 0x00000012b8c8cd75],
    [0xedd00b303d3044da, 0x61ee36b4fba7ba8a, 0x0000001b4d44f10e],
    [0x01f2ff2f93ba981c, 0x9609d9769593a161, 0x000000035944292e],
    [0x370669df2bc6cad8, 0xeb669306ed24b887, 0x0000000ad8bf496e],
    [0x2ee13ee0a2660e3c, 0xfad595bd24a045ad, 0x00000019d351c555],
    [0x542c76d0d826a288, 0x3360375f4af6c3fb, 0x0000001404cbf5eb],
    [0xb133b94195524d72, 0x314b28c3883b328c, 0x00000018f5a8ab2e],
    [0x5f0b8b2eae00c3cf, 0xe42fe1c18b5c88a2, 0x0000000ac14a6c80],
    [0x9801aee2f7d4283d, 0x31aee11ea164f504, 0x00000000352101e3],
    [0xd7a612739ecdb7a7, 0x7941868d1d217442, 0x00000017186d7649],
    [0xc9b62c6237922da2, 0x2ac594e7bda5be50, 0x000000111b5f051b],
    [0x14e99e4cedcb4c2b, 0xe39c2435e34212fb, 0x000000065348b3ec],
    [0x4bfd9a7c24e8a232, 0x685d75716bd68a85, 0x000000195a4bd3df],
    [0xa715c67283dd5e25, 0x88c0d0135600571f, 0x0000001636bd9aa3],
    [0xf3ddb3e9c99e6d9d, 0xc4a31224f94b81ac, 0x000000084600bdd9],
    [0x0c1145a7fc303d65, 0x1c038b0472914442, 0x00000014e698b470],
    [0x3f2360290fbb262d, 0x72c5e884e85f5af7, 0x0000001a1a3e2146],
    [0x3933fecafdb0d976, 0xaafaa2aef2103a43, 0x00000010670c3e34],
    [0x15a08aae89e3d1cc, 0xf365663158987023, 0x0000000c43402d2d],
    [0x54342d33dc557116, 0xdbbd5d73d392b19a, 0x0000000ab2e10b9a],
    [0x50a528517799b481, 0x552d7a1f2862743f, 0x0000000640e205d7],
    [0x5962a76f70358ec5, 0x876991e235668947, 0x00000014556fa1b6],
    [0x4003c6a97006c482, 0x317f3f74eed7ce77, 0x0000000cb22dd0fa],
    [0x8980a5c18261da78, 0x8775aeddf8677991, 0x0000001c734a853a],
    [0xd23fad1831192824, 0x35c26d45522a3416, 0x0000000da09bcafb],
    [0xf2736c201d8167e8, 0x1fdbda39e5492918, 0x0000001cafe35e90],
    [0x856fea130403648f, 0x18dd7967335022a9, 0x00000003c1178eb0],
    [0x80103361eaac2a91, 0x92b3c4af2714d38f, 0x0000000b32cff3d4],
    [0x42881c8cc88770e6, 0x8891841fc5c600a3, 0x00000013b0f26a3a],
    [0x056eeeb9ac8dcc6c, 0x9ff2ad503f0c36f5, 0x0000000da0dde0bf],
    [0xeed4fd91a4ee06e3, 0x3d8f0fc32b032c09, 0x0000000ed0555a23],
    [0x2ab4feea0db84df7, 0x58c19aff48c49905, 0x00000008347ecf44],
    [0x1b1a69aa17401cf7, 0xd7a484f35eb17b54, 0x0000000fe9c7f138],
    [0x9b0df996dcefdd12, 0xe221e6e89e27c1a0, 0x0000000d3c117dc3],
    [0xf09d3a934dba7828, 0x4495da55dd223946, 0x0000000fce29690b],
    [0x3fbef732911ffeef, 0x5fe5aa46cf52f4f1, 0x000000029f9eaf95],
    [0x0aeb9383a9a93135, 0xf8bcb5f26817b826, 0x00000004fa067c11],
    [0xf7b3f1fe3e43b93c, 0x39615bd842b4e153, 0x000000042f314db9],
    [0x283dad8f8ef9c8fb, 0xe9f07560a065bc79, 0x0000000d52d31c02],
    [0x2942da65d79c7b82, 0x9db62e3393e005db, 0x00000000adad724b],
    [0x9a4920baa6e56278, 0x6e9048cbccf8291b, 0x000000119b1186af],
    [0x68928b5fce792933, 0x9c474e7de7997246, 0x0000000b0b2930d0],
    [0x8e31ba4d0a31af29, 0x800d08640ca03cca, 0x00000012c4c20d4c],
    [0x10b25f4cd92c36e1, 0x63b7785db096d40d, 0x00000011cfc465d0],
    [0xc97a789bbda0edeb, 0xc508eaf196077670, 0x00000012b796b3ca],
    [0x158f0d45360e45d9, 0x0c4a992b21bd6c73, 0x00000011689e94fc],
    [0xcf906b5648d8dc12, 0xf194fc913ac5bf1f, 0x0000001ce1d677df],
    [0x6963e2a793b0e725, 0xf733866156c83f65, 0x0000001656b05e74],
    [0xc8b0d83a0adfe719, 0xed97298c8451707b, 0x0000001b3bb1e005],
    [0xfe09f1884cdcfa0a, 0xa7cf3e5274792892, 0x00000001615770fb],
    [0x8e4ab734ddb11cf5, 0x059f0d23e2fd1919, 0x0000001cca714872],
    [0x5974e52567b9f06d, 0xad453225b2f8fb72, 0x0000001a8c3d0224],
    [0xb437c41c6fa699c2, 0x747ecaf313cffbb7, 0x000000088a1c1ee7],
    [0x8794ffc1719448b8, 0x27eea7c2dfaa37f2, 0x000000181666eef8],
    [0x015a239514b92691, 0x25268bc6dd4a458f, 0x0000001bf9dad5bd],
    [0xe388c59e8d43569d, 0x54ec275268396d7d, 0x0000000e3c887ab7],
    [0x57de9aef3604ef67, 0xfc9ef5053190bb5c, 0x0000000ce2072c21],
    [0xfb9a62c48f833a40, 0x04e2455b31a406f3, 0x00000007e9c56b6d],
    [0x8940ac9b56768000, 0x48069f71d73e742a, 0x00000019620b1bf4],
    [0xaa91e50281000000, 0x60e6b42ef6e208fc, 0x0000001b12e89b90],
    [0x75f093ca00000000, 0x4153aad9fe659a22, 0x00000003d03c62c5],
    [0x4a21640000000000, 0x09947660d58895d8, 0x000000101fee3a41],
    [0x80e8000000000000, 0xacdf5730c36ef4a0, 0x0000000f24884c26],
    [0x1000000000000000, 0xeb2c9d55b349a947, 0x000000090139fbda],
    [0x0000000000000000, 0x9a0573cb5501b2a0, 0x000000152b2c7eaa],
    [0x0000000000000000, 0xd246f843ab324000, 0x00000009eb41867f],
    [0x0000000000000000, 0xf10ef61026800000, 0x0000001dc2bfb5d4],
    [0x0000000000000000, 0x8cbf676100000000, 0x00000013c6ea7beb],
    [0x0000000000000000, 0x92ec8a0000000000, 0x000000190a77a506],
    [0x0000000000000000, 0xa8e4000000000000, 0x0000000187d61607],
    [0x0000000000000000, 0xe800000000000000, 0x00000001c88e306b],
    [0x0000000000000000, 0x0000000000000000, 0x000000191fb6b510],
    [0x0000000000000000, 0x0000000000000000, 0x00000003b9aca000],
    [0x0000000000000822, 0x0000000000000000, 0x0000000000000000],
    [0x000001e494034e7a, 0x0000000000000000, 0x0000000000000000],
    [0xd31c29dde93228b0, 0x0000000000000070, 0x0000000000000000],
    [0x8d45f18e7065dd8e, 0x0000001a44df832b, 0x0000000000000000],
    [0x54317c0762380641, 0x1dc1ac084f427838, 0x0000000000000006],
    [0x5bf1d2a4bbdbcb0d, 0x39028e3bc0267fc9, 0x000000016c8e5ca2],
    [0x7e9aa63f650a0072, 0x59759c3aa826ed91, 0x00000007f7d4e34d],
    [0xa59a1bd855df90d9, 0x4d5068da29289b3e, 0x000000120262f458],
    [0x35e6e2a177afd2e4, 0xcd7542aede5991cb, 0x000000148f35b78a],
    [0xba8aedd00b303d31, 0xf10e61ee36b4fba7, 0x0000000283e22506],
    [0xa16101f2ff2f93bb, 0x292e9609d9769593, 0x000000019dc0cd6e],
    [0xb887370669df2bc7, 0x496eeb669306ed24, 0x00000019a6196f19],
    [0x45ad2ee13ee0a267, 0xc555fad595bd24a0, 0x00000005e336b0eb],
    [0xc3fb542c76d0d827, 0xf5eb3360375f4af6, 0x0000001917a4903d],
    [0x328cb133b9419553, 0xab2e314b28c3883b, 0x0000000e6d24085f],
    [0x88a25f0b8b2eae01, 0x6c80e42fe1c18b5c, 0x00000016464c1c38],
    [0xf5049801aee2f7d5, 0x01e331aee11ea164, 0x0000000d231f7fbe],
    [0x7442d7a612739ece, 0x76497941868d1d21, 0x0000000e6fed6c9c],
    [0xbe50c9b62c623793, 0x051b2ac594e7bda5, 0x00000006a0788c7b],
    [0x12fb14e99e4cedcc, 0xb3ece39c2435e342, 0x0000001ca48f673a],
    [0x8a854bfd9a7c24e9, 0xd3df685d75716bd6, 0x0000000daaf626ee],
    [0x571fa715c67283de, 0x9aa388c0d0135600, 0x00000019cdd764a0],
    [0x81acf3ddb3e9c99f, 0xbdd9c4a31224f94b, 0x00000007975a70e9],
    [0x44420c1145a7fc31, 0xb4701c038b047291, 0x000000189eb0d51f],
    [0x5af73f2360290fbc, 0x214672c5e884e85f, 0x0000000761c16646],
    [0x3a433933fecafdb1, 0x3e34aafaa2aef210, 0x0000001054129716],
    [0x702315a08aae89e4, 0x2d2df36566315898, 0x000000052dc91c2c],
    [0xb19a54342d33dc56, 0x0b9adbbd5d73d392, 0x0000000a491fa063],
    [0x743f50a52851779a, 0x05d7552d7a1f2862, 0x000000170f8fd2f5],
    [0x89475962a76f7036, 0xa1b6876991e23566, 0x0000001b3f1a7ac6],
    [0xce774003c6a97007, 0xd0fa317f3f74eed7, 0x0000001071fa149c],
    [0x79918980a5c18262, 0x853a8775aeddf867, 0x00000006b5961ccf],
    [0x3416d23fad18311a, 0xcafb35c26d45522a, 0x0000001283c9618d],
    [0x2918f2736c201d82, 0x5e901fdbda39e549, 0x00000003361ee2ac],
    [0x22a9856fea130404, 0x8eb018dd79673350, 0x0000000a549f1ca8],
    [0xd38f80103361eaad, 0xf3d492b3c4af2714, 0x0000000971686c40],
    [0x00a342881c8cc888, 0x6a3a8891841fc5c6, 0x0000000f1f77ec15],
    [0x36f5056eeeb9ac8e, 0xe0bf9ff2ad503f0c, 0x00000004fc6e4a81],
    [0x2c09eed4fd91a4ef, 0x5a233d8f0fc32b03, 0x000000006feed87a],
    [0x99052ab4feea0db9, 0xcf4458c19aff48c4, 0x0000001c7cc0e382],
    [0x7b541b1a69aa1741, 0xf138d7a484f35eb1, 0x00000000a777a71d],
    [0xc1a09b0df996dcf0, 0x7dc3e221e6e89e27, 0x00000006f8b2d63b],
    [0x3946f09d3a934dbb, 0x690b4495da55dd22, 0x0000000dd9f4be30],
    [0xf4f13fbef7329120, 0xaf955fe5aa46cf52, 0x0000000b457afc78],
    [0xb8260aeb9383a9aa, 0x7c11f8bcb5f26817, 0x0000001c19704781],
    [0xe153f7b3f1fe3e44, 0x4db939615bd842b4, 0x00000000587df309],
    [0xbc79283dad8f8efa, 0x1c02e9f07560a065, 0x000000022a89c8fa],
    [0x05db2942da65d79d, 0x724b9db62e3393e0, 0x0000001c6e49dfc5],
    [0x291b9a4920baa6e6, 0x86af6e9048cbccf8, 0x000000102b54fb05],
    [0x724668928b5fce7a, 0x30d09c474e7de799, 0x000000014961d04a],
    [0x3cca8e31ba4d0a32, 0x0d4c800d08640ca0, 0x00000011461bfc07],
    [0xd40d10b25f4cd92d, 0x65d063b7785db096, 0x00000001a4543206],
    [0x7670c97a789bbda1, 0xb3cac508eaf19607, 0x000000017d5552ad],
    [0x6c73158f0d45360f, 0x94fc0c4a992b21bd, 0x0000000aa411f341],
    [0xbf1fcf906b5648d9, 0x77dff194fc913ac5, 0x0000000f44fd7603],
    [0x3f656963e2a793b1, 0x5e74f733866156c8, 0x00000000ceb975fb],
    [0x707bc8b0d83a0ae0, 0xe005ed97298c8451, 0x0000001cb95d1fdd],
    [0x2892fe09f1884cdd, 0x70fba7cf3e527479, 0x00000015db643417],
    [0x19198e4ab734ddb2, 0x4872059f0d23e2fd, 0x0000000575367636],
    [0xfb725974e52567ba, 0x0224ad453225b2f8, 0x0000000ca384b10d],
    [0xfbb7b437c41c6fa7, 0x1ee7747ecaf313cf, 0x00000003075c01b0],
    [0x37f28794ffc17195, 0xeef827eea7c2dfaa, 0x0000000b3437e777],
    [0x458f015a239514ba, 0xd5bd25268bc6dd4a, 0x0000001bec97950b],
    [0x6d7de388c59e8d44, 0x7ab754ec27526839, 0x00000002c16a81ff],
    [0xbb5c57de9aef3605, 0x2c21fc9ef5053190, 0x0000001dae5ca9b0],
    [0x06f3fb9a62c48f84, 0x6b6d04e2455b31a4, 0x0000000b374c647d],
    [0x742a8940ac9b5677, 0x1bf448069f71d73e, 0x0000001d3397b679],
    [0x08fcaa91e5028100, 0x9b9060e6b42ef6e2, 0x0000001c32abad9b],
    [0x9a2275f093ca0000, 0x62c54153aad9fe65, 0x000000066d8ba3ef],
    [0x95d84a2164000000, 0x3a4109947660d588, 0x00000019ef1cc4a7],
    [0xf4a080e800000000, 0x4c26acdf5730c36e, 0x000000092224fc4c],
    [0xa947100000000000, 0xfbdaeb2c9d55b349, 0x00000011c3aeed31],
    [0xb2a0000000000000, 0x7eaa9a0573cb5501, 0x0000000ba344669f],
    [0x4000000000000000, 0x867fd246f843ab32, 0x00000007553c5e12],
    [0x0000000000000000, 0xb5d4f10ef6102680, 0x000000045032fc7b],
    [0x0000000000000000, 0x7beb8cbf67610000, 0x0000001ccdb51321],
    [0x0000000000000000, 0xa50692ec8a000000, 0x00000007cbce40ea],
    [0x0000000000000000, 0x1607a8e400000000, 0x00000018d483f008],
    [0x0000000000000000, 0x306be80000000000, 0x00000001e1f765ea],
    [0x0000000000000000, 0xb510000000000000, 0x00000018b95dc996],
    [0x0000000000000000, 0xa000000000000000, 0x000000054975867e],
    [0x0000000000000000, 0x0000000000000000, 0x0000001d7b702a40],
    [0x0000000000000000, 0x0000000000000000, 0x0000000ee6b28000],
    [0x0000000001e49404, 0x0000000000000000, 0x0000000000000000],
    [0x0070d31c29dde933, 0x0000000000000000, 0x0000000000000000],
    [0x832b8d45f18e7066, 0x00000000001a44df, 0x0000000000000000],
    [0x783854317c076239, 0x00061dc1ac084f42, 0x0000000000000000],
    [0x7fc95bf1d2a4bbdc, 0x5ca239028e3bc026, 0x0000000000016c8e],
    [0xed917e9aa63f650b, 0xe34d59759c3aa826, 0x00000003580871d1],
    [0x9b3ea59a1bd855e0, 0xf4584d5068da2928, 0x0000001310e62d80],
    [0x91cb35e6e2a177b0, 0xb78acd7542aede59, 0x0000000038e417bd],
    [0xfba7ba8aedd00b31, 0x2506f10e61ee36b4, 0x0000000e5e9e19ad],
    [0x9593a16101f2ff30, 0xcd6e292e9609d976, 0x0000000a82d47ef2],
    [0xed24b887370669e0, 0x6f19496eeb669306, 0x0000001abac28ddb],
    [0x24a045ad2ee13ee1, 0xb0ebc555fad595bd, 0x0000001549e3cecc],
    [0x4af6c3fb542c76d1, 0x903df5eb3360375f, 0x00000011db2547e9],
    [0x883b328cb133b942, 0x085fab2e314b28c3, 0x00000018941258c4],
    [0x8b5c88a25f0b8b2f, 0x1c386c80e42fe1c1, 0x0000000fd710c49c],
    [0xa164f5049801aee3, 0x7fbe01e331aee11e, 0x000000068b802937],
    [0x1d217442d7a61274, 0x6c9c76497941868d, 0x0000000cebff6d88],
    [0xbda5be50c9b62c63, 0x8c7b051b2ac594e7, 0x00000001f6200b15],
    [0xe34212fb14e99e4d, 0x673ab3ece39c2435, 0x000000050467dd07],
    [0x6bd68a854bfd9a7d, 0x26eed3df685d7571, 0x00000001b944783c],
    [0x5600571fa715c673, 0x64a09aa388c0d013, 0x0000000e0157ed38],
    [0xf94b81acf3ddb3ea, 0x70e9bdd9c4a31224, 0x0000000d214a0ba7],
    [0x729144420c1145a8, 0xd51fb4701c038b04, 0x000000092edeea75],
    [0xe85f5af73f23602a, 0x6646214672c5e884, 0x0000001b6f5d7dd3],
    [0xf2103a433933fecb, 0x97163e34aafaa2ae, 0x000000136aff7e8e],
    [0x5898702315a08aaf, 0x1c2c2d2df3656631, 0x0000000365a486ef],
    [0xd392b19a54342d34, 0xa0630b9adbbd5d73, 0x00000019deaccd37],
    [0x2862743f50a52852, 0xd2f505d7552d7a1f, 0x0000000cf39933cf],
    [0x356689475962a770, 0x7ac6a1b6876991e2, 0x0000001295e25c33],
    [0xeed7ce774003c6aa, 0x149cd0fa317f3f74, 0x0000000bfc6c41a3],
    [0xf86779918980a5c2, 0x1ccf853a8775aedd, 0x000000082af638c3],
    [0x522a3416d23fad19, 0x618dcafb35c26d45, 0x0000000fa0381d46],
    [0xe5492918f2736c21, 0xe2ac5e901fdbda39, 0x000000106309e60d],
    [0x335022a9856fea14, 0x1ca88eb018dd7967, 0x000000033ba30a58],
    [0x2714d38f80103362, 0x6c40f3d492b3c4af, 0x0000001483e19ce5],
    [0xc5c600a342881c8d, 0xec156a3a8891841f, 0x000000179d461eaf],
    [0x3f0c36f5056eeeba, 0x4a81e0bf9ff2ad50, 0x0000000b2862c4a6],
    [0x2b032c09eed4fd92, 0xd87a5a233d8f0fc3, 0x00000008ea52f7b7],
    [0x48c499052ab4feeb, 0xe382cf4458c19aff, 0x0000000d00a87d30],
    [0x5eb17b541b1a69ab, 0xa71df138d7a484f3, 0x0000000b61fe95fa],
    [0x9e27c1a09b0df997, 0xd63b7dc3e221e6e8, 0x0000001c8ead3678],
    [0xdd223946f09d3a94, 0xbe30690b4495da55, 0x0000001c226feed0],
    [0xcf52f4f13fbef733, 0xfc78af955fe5aa46, 0x00000012cca74766],
    [0x6817b8260aeb9384, 0x47817c11f8bcb5f2, 0x00000017fa74f448],
    [0x42b4e153f7b3f1ff, 0xf3094db939615bd8, 0x00000010d42ee3e8],
    [0xa065bc79283dad90, 0xc8fa1c02e9f07560, 0x000000186f782847],
    [0x93e005db2942da66, 0xdfc5724b9db62e33, 0x00000010b6b92f7e],
    [0xccf8291b9a4920bb, 0xfb0586af6e9048cb, 0x0000001d8a493aaf],
    [0xe799724668928b60, 0xd04a30d09c474e7d, 0x0000000b2bdd236f],
    [0x0ca03cca8e31ba4e, 0xfc070d4c800d0864, 0x0000001a089ca03b],
    [0xb096d40d10b25f4d, 0x320665d063b7785d, 0x0000000df75a912c],
    [0x96077670c97a789c, 0x52adb3cac508eaf1, 0x0000000a4a4070c9],
    [0x21bd6c73158f0d46, 0xf34194fc0c4a992b, 0x000000111263a02a],
    [0x3ac5bf1fcf906b57, 0x760377dff194fc91, 0x0000000a000856bb],
    [0x56c83f656963e2a8, 0x75fb5e74f7338661, 0x0000000dd826b5d5],
    [0x8451707bc8b0d83b, 0x1fdde005ed97298c, 0x00000013e5dd5714],
    [0x74792892fe09f189, 0x341770fba7cf3e52, 0x00000004af832f3f],
    [0xe2fd19198e4ab735, 0x76364872059f0d23, 0x0000000eb7389c3e],
    [0xb2f8fb725974e526, 0xb10d0224ad453225, 0x0000000e8b02e8a0],
    [0x13cffbb7b437c41d, 0x01b01ee7747ecaf3, 0x000000079c924d06],
    [0xdfaa37f28794ffc2, 0xe777eef827eea7c2, 0x0000000166055866],
    [0xdd4a458f015a2396, 0x950bd5bd25268bc6, 0x00000017f59114dd],
    [0x68396d7de388c59f, 0x81ff7ab754ec2752, 0x00000015c9ef3afc],
    [0x3190bb5c57de9af0, 0xa9b02c21fc9ef505, 0x0000001cfd3e538b],
    [0x31a406f3fb9a62c5, 0x647d6b6d04e2455b, 0x00000002b728e20b],
    [0xd73e742a8940ac9c, 0xb6791bf448069f71, 0x00000002a70c587f],
    [0xf6e208fcaa91e503, 0xad9b9b9060e6b42e, 0x0000001dbc467447],
    [0xfe659a2275f093ca, 0xa3ef62c54153aad9, 0x00000010b059db72],
    [0xd58895d84a216400, 0xc4a73a4109947660, 0x0000001ab1193f1f],
    [0xc36ef4a080e80000, 0xfc4c4c26acdf5730, 0x000000076587e831],
    [0xb349a94710000000, 0xed31fbdaeb2c9d55, 0x0000000ba35ecc86],
    [0x5501b2a000000000, 0x669f7eaa9a0573cb, 0x000000019cdaac46],
    [0xab32400000000000, 0x5e12867fd246f843, 0x0000001064380b1d],
    [0x2680000000000000, 0xfc7bb5d4f10ef610, 0x00000006d670085e],
    [0x0000000000000000, 0x13217beb8cbf6761, 0x000000161d9f588d],
    [0x0000000000000000, 0x40eaa50692ec8a00, 0x000000030b508acc],
    [0x0000000000000000, 0xf0081607a8e40000, 0x00000011c1114c68],
    [0x0000000000000000, 0x65ea306be8000000, 0x000000186ec50f57],
    [0x0000000000000000, 0xc996b51000000000, 0x0000001459553e74],
    [0x0000000000000000, 0x867ea00000000000, 0x0000001b31132774],
    [0x0000000000000000, 0x2a40000000000000, 0x0000001b2174092c],
    [0x0000000000000000, 0x8000000000000000, 0x0000000a487103d6],
    [0x0000000000000000, 0x0000000000000000, 0x0000001423cd4100],
    [0x00000000000001e5, 0x0000000000000000, 0x0000000000000000],
    [0x00000070d31c29de, 0x0000000000000000, 0x0000000000000000],
    [0x44df832b8d45f18f, 0x000000000000001a, 0x0000000000000000],
    [0x4f42783854317c08, 0x000000061dc1ac08, 0x0000000000000000],
    [0xc0267fc95bf1d2a5, 0x6c8e5ca239028e3b, 0x0000000000000001],
    [0xa826ed917e9aa640, 0x71d1e34d59759c3a, 0x0000000054e13ca5],
    [0x29289b3ea59a1bd9, 0x2d80f4584d5068da, 0x00000008b7df6375],
    [0xde5991cb35e6e2a2, 0x17bdb78acd7542ae, 0x0000001b48568dcb],
    [0x36b4fba7ba8aedd1, 0x19ad2506f10e61ee, 0x000000117be04229],
    [0xd9769593a16101f3, 0x7ef2cd6e292e9609, 0x0000000991c4c7f3],
    [0x9306ed24b8873707, 0x8ddb6f19496eeb66, 0x0000001ae4177593],
    [0x95bd24a045ad2ee2, 0xceccb0ebc555fad5, 0x000000048d84568a],
    [0x375f4af6c3fb542d, 0x47e9903df5eb3360, 0x0000000284321b16],
    [0x28c3883b328cb134, 0x58c4085fab2e314b, 0x00000005300bab7d],
    [0xe1c18b5c88a25f0c, 0xc49c1c386c80e42f, 0x0000001d2f3f7be5],
    [0xe11ea164f5049802, 0x29377fbe01e331ae, 0x00000017b1d88d8d],
    [0x868d1d217442d7a7, 0x6d886c9c76497941, 0x000000031074f859],
    [0x94e7bda5be50c9b7, 0x0b158c7b051b2ac5, 0x00000014d250e587],
    [0x2435e34212fb14ea, 0xdd07673ab3ece39c, 0x00000001a3d03115],
    [0x75716bd68a854bfe, 0x783c26eed3df685d, 0x000000051728eba6],
    [0xd0135600571fa716, 0xed3864a09aa388c0, 0x00000008f4f88c07],
    [0x1224f94b81acf3de, 0x0ba770e9bdd9c4a3, 0x00000001d876f44c],
    [0x8b04729144420c12, 0xea75d51fb4701c03, 0x00000011b4aa9af1],
    [0xe884e85f5af73f24, 0x7dd36646214672c5, 0x0000001a85ea1601],
    [0xa2aef2103a433934, 0x7e8e97163e34aafa, 0x0000000058e69706],
    [0x66315898702315a1, 0x86ef1c2c2d2df365, 0x0000000183181e75],
    [0x5d73d392b19a5435, 0xcd37a0630b9adbbd, 0x0000001b5d2903cd],
    [0x7a1f2862743f50a6, 0x33cfd2f505d7552d, 0x000000121d56a95b],
    [0x91e2356689475963, 0x5c337ac6a1b68769, 0x000000153c160785],
    [0x3f74eed7ce774004, 0x41a3149cd0fa317f, 0x000000013f7d8f04],
    [0xaeddf86779918981, 0x38c31ccf853a8775, 0x00000000fdb36da5],
    [0x6d45522a3416d240, 0x1d46618dcafb35c2, 0x00000008aa967bcd],
    [0xda39e5492918f274, 0xe60de2ac5e901fdb, 0x00000011f45fadeb],
    [0x7967335022a98570, 0x0a581ca88eb018dd, 0x000000191f42bb1f],
    [0xc4af2714d38f8011, 0x9ce56c40f3d492b3, 0x000000073a2705c5],
    [0x841fc5c600a34289, 0x1eafec156a3a8891, 0x0000001035402fc3],
    [0xad503f0c36f5056f, 0xc4a64a81e0bf9ff2, 0x0000000fa0a7f773],
    [0x0fc32b032c09eed5, 0xf7b7d87a5a233d8f, 0x0000001af451f85f],
    [0x9aff48c499052ab5, 0x7d30e382cf4458c1, 0x00000016581e1cf3],
    [0x84f35eb17b541b1b, 0x95faa71df138d7a4, 0x0000001ae3aeb4a0],
    [0xe6e89e27c1a09b0e, 0x3678d63b7dc3e221, 0x000000079644b3a4],
    [0xda55dd223946f09e, 0xeed0be30690b4495, 0x000000086e73310b],
    [0xaa46cf52f4f13fbf, 0x4766fc78af955fe5, 0x00000002c7412fd8],
    [0xb5f26817b8260aec, 0xf44847817c11f8bc, 0x000000148dd5587a],
    [0x5bd842b4e153f7b4, 0xe3e8f3094db93961, 0x0000001ca0a4a0b6],
    [0x7560a065bc79283e, 0x2847c8fa1c02e9f0, 0x0000000cc7b719fb],
    [0x2e3393e005db2943, 0x2f7edfc5724b9db6, 0x0000001cacbff449],
    [0x48cbccf8291b9a4a, 0x3aaffb0586af6e90, 0x000000110a328f5f],
    [0x4e7de79972466893, 0x236fd04a30d09c47, 0x000000162c1b0106],
    [0x08640ca03cca8e32, 0xa03bfc070d4c800d, 0x000000016de0ee3a],
    [0x785db096d40d10b3, 0x912c320665d063b7, 0x0000000da660799a],
    [0xeaf196077670c97b, 0x70c952adb3cac508, 0x000000062f857aaa],
    [0x992b21bd6c731590, 0xa02af34194fc0c4a, 0x00000009e1a7bc28],
    [0xfc913ac5bf1fcf91, 0x56bb760377dff194, 0x00000009757a4e48],
    [0x866156c83f656964, 0xb5d575fb5e74f733, 0x00000010d7ba7567],
    [0x298c8451707bc8b1, 0x57141fdde005ed97, 0x00000018259d6a14],
    [0x3e5274792892fe0a, 0x2f3f341770fba7cf, 0x00000004bc5e1229],
    [0x0d23e2fd19198e4b, 0x9c3e76364872059f, 0x0000000996ca7c4e],
    [0x3225b2f8fb725975, 0xe8a0b10d0224ad45, 0x000000124d8a6a1a],
    [0xcaf313cffbb7b438, 0x4d0601b01ee7747e, 0x0000000643e23507],
    [0xa7c2dfaa37f28795, 0x5866e777eef827ee, 0x00000001b32a7ac7],
    [0x8bc6dd4a458f015b, 0x14dd950bd5bd2526, 0x000000109c833101],
    [0x275268396d7de389, 0x3afc81ff7ab754ec, 0x000000004076791c],
    [0xf5053190bb5c57df, 0x538ba9b02c21fc9e, 0x0000000692a9f467],
    [0x455b31a406f3fb9b, 0xe20b647d6b6d04e2, 0x000000180ebafa0b],
    [0x9f71d73e742a8941, 0x587fb6791bf44806, 0x00000002c447fb60],
    [0xb42ef6e208fcaa92, 0x7447ad9b9b9060e6, 0x000000166ea6b1b6],
    [0xaad9fe659a2275f1, 0xdb72a3ef62c54153, 0x0000000cadb96fe1],
    [0x7660d58895d84a22, 0x3f1fc4a73a410994, 0x00000016c8bea5e7],
    [0x5730c36ef4a080e8, 0xe831fc4c4c26acdf, 0x0000001809f9c33d],
    [0x9d55b349a9471000, 0xcc86ed31fbdaeb2c, 0x0000000e69f20c6e],
    [0x73cb5501b2a00000, 0xac46669f7eaa9a05, 0x00000019cc218f37],
    [0xf843ab3240000000, 0x0b1d5e12867fd246, 0x0000000cf65dc9f0],
    [0xf610268000000000, 0x085efc7bb5d4f10e, 0x0000001a164edd1e],
    [0x6761000000000000, 0x588d13217beb8cbf, 0x00000006fe169fef],
    [0x8a00000000000000, 0x8acc40eaa50692ec, 0x00000019ecbba425],
    [0x0000000000000000, 0x4c68f0081607a8e4, 0x00000008bdb0315a],
    [0x0000000000000000, 0x0f5765ea306be800, 0x00000015063566bd],
    [0x0000000000000000, 0x3e74c996b5100000, 0x0000000e37748d2b],
    [0x0000000000000000, 0x2774867ea0000000, 0x0000000a118a9bff],
    [0x0000000000000000, 0x092c2a4000000000, 0x0000001d9af9ec3a],
    [0x0000000000000000, 0x03d6800000000000, 0x0000000d83347d8b],
    [0x0000000000000000, 0x4100000000000000, 0x00000002908b6f90],
    [0x0000000000000000, 0x0000000000000000, 0x00000003c8ceed4a],
    [0x0000000000000000, 0x0000000000000000, 0x000000113abe6400],
    [0x000000000070d31d, 0x0000000000000000, 0x0000000000000000],
    [0x001a44df832b8d46, 0x0000000000000000, 0x0000000000000000],
    [0xac084f4278385432, 0x0000000000061dc1, 0x0000000000000000],
    [0x8e3bc0267fc95bf2, 0x00016c8e5ca23902, 0x0000000000000000],
    [0x9c3aa826ed917e9b, 0x3ca571d1e34d5975, 0x00000000000054e1],
    [0x68da29289b3ea59b, 0x63752d80f4584d50, 0x00000016a3c5569c],
    [0x42aede5991cb35e7, 0x8dcb17bdb78acd75, 0x000000069c163c74],
    [0x61ee36b4fba7ba8b, 0x422919ad2506f10e, 0x0000001b23271287],
    [0x9609d9769593a162, 0xc7f37ef2cd6e292e, 0x00000001b0a2ffd8],
    [0xeb669306ed24b888, 0x75938ddb6f19496e, 0x00000014abc37482],
    [0xfad595bd24a045ae, 0x568aceccb0ebc555, 0x000000009295ad3b],
    [0x3360375f4af6c3fc, 0x1b1647e9903df5eb, 0x0000000dd0d2df73],
    [0x314b28c3883b328d, 0xab7d58c4085fab2e, 0x0000001accd74159],
    [0xe42fe1c18b5c88a3, 0x7be5c49c1c386c80, 0x00000014e0bdce2d],
    [0x31aee11ea164f505, 0x8d8d29377fbe01e3, 0x0000000a970e604b],
    [0x7941868d1d217443, 0xf8596d886c9c7649, 0x00000011974e4d1b],
    [0x2ac594e7bda5be51, 0xe5870b158c7b051b, 0x0000000683261400],
    [0xe39c2435e34212fc, 0x3115dd07673ab3ec, 0x000000003570e7e7],
    [0x685d75716bd68a86, 0xeba6783c26eed3df, 0x0000001806b4fdd2],
    [0x88c0d01356005720, 0x8c07ed3864a09aa3, 0x000000134e728dcb],
    [0xc4a31224f94b81ad, 0xf44c0ba770e9bdd9, 0x0000001196f3acee],
    [0x1c038b0472914443, 0x9af1ea75d51fb470, 0x00000019d5640932],
    [0x72c5e884e85f5af8, 0x16017dd366462146, 0x0000000bc84ee4d3],
    [0xaafaa2aef2103a44, 0x97067e8e97163e34, 0x00000013584f2442],
    [0xf365663158987024, 0x1e7586ef1c2c2d2d, 0x0000000f8111e43e],
    [0xdbbd5d73d392b19b, 0x03cdcd37a0630b9a, 0x0000000e76946cd5],
    [0x552d7a1f28627440, 0xa95b33cfd2f505d7, 0x00000013cb47cd19],
    [0x876991e235668948, 0x07855c337ac6a1b6, 0x00000005f98c2570],
    [0x317f3f74eed7ce78, 0x8f0441a3149cd0fa, 0x0000001a1578a868],
    [0x8775aeddf8677992, 0x6da538c31ccf853a, 0x00000018582e8489],
    [0x35c26d45522a3417, 0x7bcd1d46618dcafb, 0x0000000231f879fd],
    [0x1fdbda39e5492919, 0xadebe60de2ac5e90, 0x0000001d3767c2d2],
    [0x18dd7967335022aa, 0xbb1f0a581ca88eb0, 0x0000001340133b29],
    [0x92b3c4af2714d390, 0x05c59ce56c40f3d4, 0x00000009b75ba5b5],
    [0x8891841fc5c600a4, 0x2fc31eafec156a3a, 0x0000000c5863da97],
    [0x9ff2ad503f0c36f6, 0xf773c4a64a81e0bf, 0x000000056606ff22],
    [0x3d8f0fc32b032c0a, 0xf85ff7b7d87a5a23, 0x00000008242c2137],
    [0x58c19aff48c49906, 0x1cf37d30e382cf44, 0x0000000d0815b1ce],
    [0xd7a484f35eb17b55, 0xb4a095faa71df138, 0x000000122fe72b2b],
    [0xe221e6e89e27c1a1, 0xb3a43678d63b7dc3, 0x0000000a2d0e27b1],
    [0x4495da55dd223947, 0x310beed0be30690b, 0x0000000b92742116],
    [0x5fe5aa46cf52f4f2, 0x2fd84766fc78af95, 0x000000052ab8c3eb],
    [0xf8bcb5f26817b827, 0x587af44847817c11, 0x00000018f4d63450],
    [0x39615bd842b4e154, 0xa0b6e3e8f3094db9, 0x00000012b4f8f614],
    [0xe9f07560a065bc7a, 0x19fb2847c8fa1c02, 0x00000004cd831b5c],
    [0x9db62e3393e005dc, 0xf4492f7edfc5724b, 0x0000001571ad2fde],
    [0x6e9048cbccf8291c, 0x8f5f3aaffb0586af, 0x000000161bb6beba],
    [0x9c474e7de7997247, 0x0106236fd04a30d0, 0x0000000da27366f1],
    [0x800d08640ca03ccb, 0xee3aa03bfc070d4c, 0x0000001a4f9032aa],
    [0x63b7785db096d40e, 0x799a912c320665d0, 0x00000009fedcb22c],
    [0xc508eaf196077671, 0x7aaa70c952adb3ca, 0x0000000a5aeade64],
    [0x0c4a992b21bd6c74, 0xbc28a02af34194fc, 0x0000001765065b50],
    [0xf194fc913ac5bf20, 0x4e4856bb760377df, 0x00000012cc2e41d2],
    [0xf733866156c83f66, 0x7567b5d575fb5e74, 0x0000001329ceb546],
    [0xed97298c8451707c, 0x6a1457141fdde005, 0x0000001067a91fef],
    [0xa7cf3e5274792893, 0x12292f3f341770fb, 0x00000019f0d06a02],
    [0x059f0d23e2fd191a, 0x7c4e9c3e76364872, 0x000000007b700cfe],
    [0xad453225b2f8fb73, 0x6a1ae8a0b10d0224, 0x0000001d7320b362],
    [0x747ecaf313cffbb8, 0x35074d0601b01ee7, 0x00000016e9f5af86],
    [0x27eea7c2dfaa37f3, 0x7ac75866e777eef8, 0x0000000171f97afc],
    [0x25268bc6dd4a4590, 0x310114dd950bd5bd, 0x0000001cfb90062c],
    [0x54ec275268396d7e, 0x791c3afc81ff7ab7, 0x0000000a4a039920],
    [0xfc9ef5053190bb5d, 0xf467538ba9b02c21, 0x000000078f8bfc23],
    [0x04e2455b31a406f4, 0xfa0be20b647d6b6d, 0x000000085f113542],
    [0x48069f71d73e742b, 0xfb60587fb6791bf4, 0x0000000f9820018b],
    [0x60e6b42ef6e208fd, 0xb1b67447ad9b9b90, 0x00000002ca2de0b4],
    [0x4153aad9fe659a23, 0x6fe1db72a3ef62c5, 0x0000000c44d188c8],
    [0x09947660d58895d9, 0xa5e73f1fc4a73a41, 0x00000010dd9583b9],
    [0xacdf5730c36ef4a1, 0xc33de831fc4c4c26, 0x0000000d6c179590],
    [0xeb2c9d55b349a948, 0x0c6ecc86ed31fbda, 0x00000003e721f1d0],
    [0x9a0573cb5501b2a0, 0x8f37ac46669f7eaa, 0x00000012a3442d99],
    [0xd246f843ab324000, 0xc9f00b1d5e12867f, 0x00000005f3762733],
    [0xf10ef61026800000, 0xdd1e085efc7bb5d4, 0x0000000c0edaaa4d],
    [0x8cbf676100000000, 0x9fef588d13217beb, 0x00000012210a6078],
    [0x92ec8a0000000000, 0xa4258acc40eaa506, 0x0000001c15cb8d96],
    [0xa8e4000000000000, 0x315a4c68f0081607, 0x0000000545854318],
    [0xe800000000000000, 0x66bd0f5765ea306b, 0x00000005a20096df],
    [0x0000000000000000, 0x8d2b3e74c996b510, 0x00000016365ca755],
    [0x0000000000000000, 0x9bff2774867ea000, 0x00000013eb4364cc],
    [0x0000000000000000, 0xec3a092c2a400000, 0x00000011d64618ac],
    [0x0000000000000000, 0x7d8b03d680000000, 0x0000000a759aed6c],
    [0x0000000000000000, 0x6f90410000000000, 0x0000001942882a92],
    [0x0000000000000000, 0xed4a000000000000, 0x000000044adbe7c9],
    [0x0000000000000000, 0x6400000000000000, 0x00000011366321c0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000efdfaf6e8],
    [0x0000000000000000, 0x0000000000000000, 0x0000001836e21000],
    [0x0000000000000071, 0x0000000000000000, 0x0000000000000000],
    [0x0000001a44df832c, 0x0000000000000000, 0x0000000000000000],
    [0x1dc1ac084f427839, 0x0000000000000006, 0x0000000000000000],
    [0x39028e3bc0267fca, 0x000000016c8e5ca2, 0x0000000000000000],
    [0x59759c3aa826ed92, 0x54e13ca571d1e34d, 0x0000000000000000],
    [0x4d5068da29289b3f, 0x569c63752d80f458, 0x0000000013c33b72],
    [0xcd7542aede5991cc, 0x3c748dcb17bdb78a, 0x0000001a9f185d57],
    [0xf10e61ee36b4fba8, 0x1287422919ad2506, 0x000000144fae107f],
    [0x292e9609d9769594, 0xffd8c7f37ef2cd6e, 0x0000001d961a963b],
    [0x496eeb669306ed25, 0x748275938ddb6f19, 0x0000000df83e365e],
    [0xc555fad595bd24a1, 0xad3b568aceccb0eb, 0x00000015fdf6af82],
    [0xf5eb3360375f4af7, 0xdf731b1647e9903d, 0x000000009f8aff54],
    [0xab2e314b28c3883c, 0x4159ab7d58c4085f, 0x00000013c2d0eacd],
    [0x6c80e42fe1c18b5d, 0xce2d7be5c49c1c38, 0x00000011fcc5f007],
    [0x01e331aee11ea165, 0x604b8d8d29377fbe, 0x00000001d13cab9a],
    [0x76497941868d1d22, 0x4d1bf8596d886c9c, 0x000000062424270e],
    [0x051b2ac594e7bda6, 0x1400e5870b158c7b, 0x00000003546b1de8],
    [0xb3ece39c2435e343, 0xe7e73115dd07673a, 0x000000183b8a5d38],
    [0xd3df685d75716bd7, 0xfdd2eba6783c26ee, 0x0000000d3fdab05f],
    [0x9aa388c0d0135601, 0x8dcb8c07ed3864a0, 0x00000016598a0b79],
    [0xbdd9c4a31224f94c, 0xaceef44c0ba770e9, 0x0000001c4d2d1f9a],
    [0xb4701c038b047292, 0x09329af1ea75d51f, 0x0000000635fc2681],
    [0x214672c5e884e860, 0xe4d316017dd36646, 0x000000003dbf0368],
    [0x3e34aafaa2aef211, 0x244297067e8e9716, 0x000000186c29119c],
    [0x2d2df36566315899, 0xe43e1e7586ef1c2c, 0x000000068d5f5d79],
    [0x0b9adbbd5d73d393, 0x6cd503cdcd37a063, 0x0000001c614dcc7c],
    [0x05d7552d7a1f2863, 0xcd19a95b33cfd2f5, 0x0000001cf850bde4],
    [0xa1b6876991e23567, 0x257007855c337ac6, 0x000000177837d54e],
    [0xd0fa317f3f74eed8, 0xa8688f0441a3149c, 0x0000001231e100aa],
    [0x853a8775aeddf868, 0x84896da538c31ccf, 0x00000009ee9b10be],
    [0xcafb35c26d45522b, 0x79fd7bcd1d46618d, 0x0000000e8e58bb85],
    [0x5e901fdbda39e54a, 0xc2d2adebe60de2ac, 0x00000001466d2046],
    [0x8eb018dd79673351, 0x3b29bb1f0a581ca8, 0x0000001079af968c],
    [0xf3d492b3c4af2715, 0xa5b505c59ce56c40, 0x00000002d907dbe9],
    [0x6a3a8891841fc5c7, 0xda972fc31eafec15, 0x000000189911c3fa],
    [0xe0bf9ff2ad503f0d, 0xff22f773c4a64a81, 0x0000001c9aa9476f],
    [0x5a233d8f0fc32b04, 0x2137f85ff7b7d87a, 0x0000001a1384e962],
    [0xcf4458c19aff48c5, 0xb1ce1cf37d30e382, 0x00000016d8fd501f],
    [0xf138d7a484f35eb2, 0x2b2bb4a095faa71d, 0x00000007612478f6],
    [0x7dc3e221e6e89e28, 0x27b1b3a43678d63b, 0x0000001b836648fc],
    [0x690b4495da55dd23, 0x2116310beed0be30, 0x0000001ce837cc9f],
    [0xaf955fe5aa46cf53, 0xc3eb2fd84766fc78, 0x000000073f7294c2],
    [0x7c11f8bcb5f26818, 0x3450587af4484781, 0x0000000f8b85be19],
    [0x4db939615bd842b5, 0xf614a0b6e3e8f309, 0x00000005de4be000],
    [0x1c02e9f07560a066, 0x1b5c19fb2847c8fa, 0x00000000394b8b9f],
    [0x724b9db62e3393e1, 0x2fdef4492f7edfc5, 0x000000073e1d3afb],
    [0x86af6e9048cbccf9, 0xbeba8f5f3aaffb05, 0x0000001cae846231],
    [0x30d09c474e7de79a, 0x66f10106236fd04a, 0x0000000b9508fbc4],
    [0x0d4c800d08640ca1, 0x32aaee3aa03bfc07, 0x0000000fed157171],
    [0x65d063b7785db097, 0xb22c799a912c3206, 0x0000001a5b1f31b5],
    [0xb3cac508eaf19608, 0xde647aaa70c952ad, 0x0000000c8087cd5e],
    [0x94fc0c4a992b21be, 0x5b50bc28a02af341, 0x00000016169dcc32],
    [0x77dff194fc913ac6, 0x41d24e4856bb7603, 0x0000000bb97e45fc],
    [0x5e74f733866156c9, 0xb5467567b5d575fb, 0x0000001cee4d1c7d],
    [0xe005ed97298c8452, 0x1fef6a1457141fdd, 0x0000001d44c97a7b],
    [0x70fba7cf3e52747a, 0x6a0212292f3f3417, 0x0000001caace8aab],
    [0x4872059f0d23e2fe, 0x0cfe7c4e9c3e7636, 0x0000000a1bae8114],
    [0x0224ad453225b2f9, 0xb3626a1ae8a0b10d, 0x00000004ab1e49fd],
    [0x1ee7747ecaf313d0, 0xaf8635074d0601b0, 0x0000001d4458c733],
    [0xeef827eea7c2dfab, 0x7afc7ac75866e777, 0x0000000c08b44d74],
    [0xd5bd25268bc6dd4b, 0x062c310114dd950b, 0x0000001b1ec61539],
    [0x7ab754ec2752683a, 0x9920791c3afc81ff, 0x0000000d46e6e4bf],
    [0x2c21fc9ef5053191, 0xfc23f467538ba9b0, 0x0000000ecebec845],
    [0x6b6d04e2455b31a5, 0x3542fa0be20b647d, 0x000000104b6d2fe9],
    [0x1bf448069f71d73f, 0x018bfb60587fb679, 0x000000187ee37df2],
    [0x9b9060e6b42ef6e3, 0xe0b4b1b67447ad9b, 0x0000001a8b4a265c],
    [0x62c54153aad9fe66, 0x88c86fe1db72a3ef, 0x000000159ff21af6],
    [0x3a4109947660d589, 0x83b9a5e73f1fc4a7, 0x0000001b9932024a],
    [0x4c26acdf5730c36f, 0x9590c33de831fc4c, 0x000000115969d2da],
    [0xfbdaeb2c9d55b34a, 0xf1d00c6ecc86ed31, 0x00000015173dd018],
    [0x7eaa9a0573cb5502, 0x2d998f37ac46669f, 0x00000005ced018d3],
    [0x867fd246f843ab33, 0x2733c9f00b1d5e12, 0x000000135dcd745d],
    [0xb5d4f10ef6102680, 0xaa4ddd1e085efc7b, 0x00000015b05c05a0],
    [0x7beb8cbf67610000, 0x60789fef588d1321, 0x000000079b002b2e],
    [0xa50692ec8a000000, 0x8d96a4258acc40ea, 0x0000000acc466d8b],
    [0x1607a8e400000000, 0x4318315a4c68f008, 0x00000002b09e022c],
    [0x306be80000000000, 0x96df66bd0f5765ea, 0x0000000a4e39dcde],
    [0xb510000000000000, 0xa7558d2b3e74c996, 0x0000001605f6e21d],
    [0xa000000000000000, 0x64cc9bff2774867e, 0x00000006e77ec709],
    [0x0000000000000000, 0x18acec3a092c2a40, 0x000000022fe93493],
    [0x0000000000000000, 0xed6c7d8b03d68000, 0x00000004723bc3ef],
    [0x0000000000000000, 0x2a926f9041000000, 0x0000001a0f65258a],
    [0x0000000000000000, 0xe7c9ed4a00000000, 0x000000025df56164],
    [0x0000000000000000, 0x21c0640000000000, 0x000000177e6e980e],
    [0x0000000000000000, 0xf6e8000000000000, 0x000000034a52cb69],
    [0x0000000000000000, 0x1000000000000000, 0x00000018abf99c63],
    [0x0000000000000000, 0x0000000000000000, 0x000000171095caa0],
    [0x0000000000000000, 0x0000000000000000, 0x0000000773594000],
    [0x00000000001a44e0, 0x0000000000000000, 0x0000000000000000],
    [0x00061dc1ac084f43, 0x0000000000000000, 0x0000000000000000],
    [0x5ca239028e3bc027, 0x0000000000016c8e, 0x0000000000000000],
    [0xe34d59759c3aa827, 0x000054e13ca571d1, 0x0000000000000000],
    [0xf4584d5068da2929, 0x3b72569c63752d80, 0x00000000000013c3],
    [0xb78acd7542aede5a, 0x5d573c748dcb17bd, 0x0000000fa75a29a6],
    [0x2506f10e61ee36b5, 0x107f1287422919ad, 0x00000008eeb58710],
    [0xcd6e292e9609d977, 0x963bffd8c7f37ef2, 0x00000003bd83e2ba],
    [0x6f19496eeb669307, 0x365e748275938ddb, 0x0000000da40c6e9a],
    [0xb0ebc555fad595be, 0xaf82ad3b568acecc, 0x000000061a612892],
    [0x903df5eb33603760, 0xff54df731b1647e9, 0x0000000459bf7105],
    [0x085fab2e314b28c4, 0xeacd4159ab7d58c4, 0x000000016578e406],
    [0x1c386c80e42fe1c2, 0xf007ce2d7be5c49c, 0x000000019c4c02ce],
    [0x7fbe01e331aee11f, 0xab9a604b8d8d2937, 0x00000012610c7a9c],
    [0x6c9c76497941868e, 0x270e4d1bf8596d88, 0x00000006ace26e77],
    [0x8c7b051b2ac594e8, 0x1de81400e5870b15, 0x0000001bbe0bcf31],
    [0x673ab3ece39c2436, 0x5d38e7e73115dd07, 0x0000000b6f973bd1],
    [0x26eed3df685d7572, 0xb05ffdd2eba6783c, 0x00000012f1ae653c],
    [0x64a09aa388c0d014, 0x0b798dcb8c07ed38, 0x0000000e21581c6a],
    [0x70e9bdd9c4a31225, 0x1f9aaceef44c0ba7, 0x00000018b0c397db],
    [0xd51fb4701c038b05, 0x268109329af1ea75, 0x0000001537618fd7],
    [0x6646214672c5e885, 0x0368e4d316017dd3, 0x000000144a91ab20],
    [0x97163e34aafaa2af, 0x119c244297067e8e, 0x0000000774247c87],
    [0x1c2c2d2df3656632, 0x5d79e43e1e7586ef, 0x00000001a555282e],
    [0xa0630b9adbbd5d74, 0xcc7c6cd503cdcd37, 0x0000000acb93e8af],
    [0xd2f505d7552d7a20, 0xbde4cd19a95b33cf, 0x0000000b21076748],
    [0x7ac6a1b6876991e3, 0xd54e257007855c33, 0x00000010efbf5cbe],
    [0x149cd0fa317f3f75, 0x00aaa8688f0441a3, 0x0000000ea126e7f3],
    [0x1ccf853a8775aede, 0x10be84896da538c3, 0x0000001ac6b07a00],
    [0x618dcafb35c26d46, 0xbb8579fd7bcd1d46, 0x0000000003e6085d],
    [0xe2ac5e901fdbda3a, 0x2046c2d2adebe60d, 0x00000015d2e48760],
    [0x1ca88eb018dd7968, 0x968c3b29bb1f0a58, 0x00000016618f92ef],
    [0x6c40f3d492b3c4b0, 0xdbe9a5b505c59ce5, 0x00000019fb2aeec8],
    [0xec156a3a88918420, 0xc3fada972fc31eaf, 0x00000010f6bca144],
    [0x4a81e0bf9ff2ad51, 0x476fff22f773c4a6, 0x0000001002bef7ec],
    [0xd87a5a233d8f0fc4, 0xe9622137f85ff7b7, 0x0000001935ef398a],
    [0xe382cf4458c19b00, 0x501fb1ce1cf37d30, 0x000000028a629ed7],
    [0xa71df138d7a484f4, 0x78f62b2bb4a095fa, 0x0000001454426644],
    [0xd63b7dc3e221e6e9, 0x48fc27b1b3a43678, 0x0000000ff147877b],
    [0xbe30690b4495da56, 0xcc9f2116310beed0, 0x0000001cb45d4c6c],
    [0xfc78af955fe5aa47, 0x94c2c3eb2fd84766, 0x0000001954f19dcf],
    [0x47817c11f8bcb5f3, 0xbe193450587af448, 0x0000001287672bb2],
    [0xf3094db939615bd9, 0xe000f614a0b6e3e8, 0x0000000bd07e3437],
    [0xc8fa1c02e9f07561, 0x8b9f1b5c19fb2847, 0x0000000d0269100b],
    [0xdfc5724b9db62e34, 0x3afb2fdef4492f7e, 0x00000002b028c530],
    [0xfb0586af6e9048cc, 0x6231beba8f5f3aaf, 0x0000000b3ac16dad],
    [0xd04a30d09c474e7e, 0xfbc466f10106236f, 0x0000000a9112585c],
    [0xfc070d4c800d0865, 0x717132aaee3aa03b, 0x00000015a63f1688],
    [0x320665d063b7785e, 0x31b5b22c799a912c, 0x00000001f73ffe49],
    [0x52adb3cac508eaf2, 0xcd5ede647aaa70c9, 0x000000110ab68896],
    [0xf34194fc0c4a992c, 0xcc325b50bc28a02a, 0x000000054f1e665f],
    [0x760377dff194fc92, 0x45fc41d24e4856bb, 0x000000164dfc0876],
    [0x75fb5e74f7338662, 0x1c7db5467567b5d5, 0x0000001b89a49024],
    [0x1fdde005ed97298d, 0x7a7b1fef6a145714, 0x0000000868669ae1],
    [0x341770fba7cf3e53, 0x8aab6a0212292f3f, 0x00000016b22af912],
    [0x76364872059f0d24, 0x81140cfe7c4e9c3e, 0x00000004512b8df7],
    [0xb10d0224ad453226, 0x49fdb3626a1ae8a0, 0x0000001bd30190e8],
    [0x01b01ee7747ecaf4, 0xc733af8635074d06, 0x00000018481c4557],
    [0xe777eef827eea7c3, 0x4d747afc7ac75866, 0x000000146ffc01ba],
    [0x950bd5bd25268bc7, 0x1539062c310114dd, 0x0000000d931a7188],
    [0x81ff7ab754ec2753, 0xe4bf9920791c3afc, 0x00000001e1c74978],
    [0xa9b02c21fc9ef506, 0xc845fc23f467538b, 0x0000001c25d1280b],
    [0x647d6b6d04e2455c, 0x2fe93542fa0be20b, 0x00000002be47e73d],
    [0xb6791bf448069f72, 0x7df2018bfb60587f, 0x0000000e3f09d95e],
    [0xad9b9b9060e6b42f, 0x265ce0b4b1b67447, 0x0000001600291951],
    [0xa3ef62c54153aada, 0x1af688c86fe1db72, 0x00000012e4e883ee],
    [0xc4a73a4109947661, 0x024a83b9a5e73f1f, 0x00000019a2c9eb1b],
    [0xfc4c4c26acdf5731, 0xd2da9590c33de831, 0x0000000649dbdcfd],
    [0xed31fbdaeb2c9d56, 0xd018f1d00c6ecc86, 0x0000001d4bac8056],
    [0x669f7eaa9a0573cc, 0x18d32d998f37ac46, 0x0000001436736ef0],
    [0x5e12867fd246f844, 0x745d2733c9f00b1d, 0x0000001a19800e22],
    [0xfc7bb5d4f10ef611, 0x05a0aa4ddd1e085e, 0x0000000805a6a7e4],
    [0x13217beb8cbf6761, 0x2b2e60789fef588d, 0x0000001749c65657],
    [0x40eaa50692ec8a00, 0x6d8b8d96a4258acc, 0x000000144ba87234],
    [0xf0081607a8e40000, 0x022c4318315a4c68, 0x0000000c34f26e05],
    [0x65ea306be8000000, 0xdcde96df66bd0f57, 0x000000012a8775cd],
    [0xc996b51000000000, 0xe21da7558d2b3e74, 0x0000001220fb9af3],
    [0x867ea00000000000, 0xc70964cc9bff2774, 0x0000001afb2e4bd2],
    [0x2a40000000000000, 0x349318acec3a092c, 0x0000001345ec36ef],
    [0x8000000000000000, 0xc3efed6c7d8b03d6, 0x00000019e45b46a8],
    [0x0000000000000000, 0x258a2a926f904100, 0x000000097dce54a8],
    [0x0000000000000000, 0x6164e7c9ed4a0000, 0x0000000958ed1a8c],
    [0x0000000000000000, 0x980e21c064000000, 0x00000002e1ee9cf8],
    [0x0000000000000000, 0xcb69f6e800000000, 0x0000001c13f5e242],
    [0x0000000000000000, 0x9c63100000000000, 0x0000000f8d447e27],
    [0x0000000000000000, 0xcaa0000000000000, 0x0000000938fe29ad],
    [0x0000000000000000, 0x4000000000000000, 0x0000000aa962e622],
    [0x0000000000000000, 0x0000000000000000, 0x00000007f9758680],
    [0x000000000000001b, 0x0000000000000000, 0x0000000000000000],
    [0x000000061dc1ac09, 0x0000000000000000, 0x0000000000000000],
    [0x6c8e5ca239028e3c, 0x0000000000000001, 0x0000000000000000],
    [0x71d1e34d59759c3b, 0x0000000054e13ca5, 0x0000000000000000],
    [0x2d80f4584d5068db, 0x13c33b72569c6375, 0x0000000000000000],
    [0x17bdb78acd7542af, 0x29a65d573c748dcb, 0x000000000499f1bd],
    [0x19ad2506f10e61ef, 0x8710107f12874229, 0x0000000e3d94a874],
    [0x7ef2cd6e292e960a, 0xe2ba963bffd8c7f3, 0x0000001b2195e609],
    [0x8ddb6f19496eeb67, 0x6e9a365e74827593, 0x000000024d3b31c5],
    [0xceccb0ebc555fad6, 0x2892af82ad3b568a, 0x000000102a78dc92],
    [0x47e9903df5eb3361, 0x7105ff54df731b16, 0x000000043a548ab4],
    [0x58c4085fab2e314c, 0xe406eacd4159ab7d, 0x0000000c35c1c0a2],
    [0xc49c1c386c80e430, 0x02cef007ce2d7be5, 0x000000081fa64c34],
    [0x29377fbe01e331af, 0x7a9cab9a604b8d8d, 0x0000000c1c186c05],
    [0x6d886c9c76497942, 0x6e77270e4d1bf859, 0x000000014692308b],
    [0x0b158c7b051b2ac6, 0xcf311de81400e587, 0x00000002a95eeed7],
    [0xdd07673ab3ece39d, 0x3bd15d38e7e73115, 0x0000001471d83eed],
    [0x783c26eed3df685e, 0x653cb05ffdd2eba6, 0x000000196ed56da1],
    [0xed3864a09aa388c1, 0x1c6a0b798dcb8c07, 0x00000007c6863d0a],
    [0x0ba770e9bdd9c4a4, 0x97db1f9aaceef44c, 0x000000025aa982db],
    [0xea75d51fb4701c04, 0x8fd7268109329af1, 0x0000001553611fec],
    [0x7dd36646214672c6, 0xab200368e4d31601, 0x0000001946cac6cc],
    [0x7e8e97163e34aafb, 0x7c87119c24429706, 0x00000011d9cbd112],
    [0x86ef1c2c2d2df366, 0x282e5d79e43e1e75, 0x000000044de0a092],
    [0xcd37a0630b9adbbe, 0xe8afcc7c6cd503cd, 0x000000043a3d2f23],
    [0x33cfd2f505d7552e, 0x6748bde4cd19a95b, 0x000000085c56d37c],
    [0x5c337ac6a1b6876a, 0x5cbed54e25700785, 0x0000001cf7060f05],
    [0x41a3149cd0fa3180, 0xe7f300aaa8688f04, 0x000000013f9e0123],
    [0x38c31ccf853a8776, 0x7a0010be84896da5, 0x000000085c2ade5b],
    [0x1d46618dcafb35c3, 0x085dbb8579fd7bcd, 0x000000154c6d962a],
    [0xe60de2ac5e901fdc, 0x87602046c2d2adeb, 0x00000009c957cd34],
    [0x0a581ca88eb018de, 0x92ef968c3b29bb1f, 0x0000000c3af60a15],
    [0x9ce56c40f3d492b4, 0xeec8dbe9a5b505c5, 0x0000000505e8a1c3],
    [0x1eafec156a3a8892, 0xa144c3fada972fc3, 0x0000000fd11b89ed],
    [0xc4a64a81e0bf9ff3, 0xf7ec476fff22f773, 0x0000001986745dc8],
    [0xf7b7d87a5a233d90, 0x398ae9622137f85f, 0x00000010fd422c3a],
    [0x7d30e382cf4458c2, 0x9ed7501fb1ce1cf3, 0x0000000d8e7792c1],
    [0x95faa71df138d7a5, 0x664478f62b2bb4a0, 0x0000000f4748f453],
    [0x3678d63b7dc3e222, 0x877b48fc27b1b3a4, 0x000000136aff1bc3],
    [0xeed0be30690b4496, 0x4c6ccc9f2116310b, 0x0000000fb90e32e3],
    [0x4766fc78af955fe6, 0x9dcf94c2c3eb2fd8, 0x000000171ea766e9],
    [0xf44847817c11f8bd, 0x2bb2be193450587a, 0x00000018973b1cae],
    [0xe3e8f3094db93962, 0x3437e000f614a0b6, 0x0000000abffce9d1],
    [0x2847c8fa1c02e9f1, 0x100b8b9f1b5c19fb, 0x00000012e8225d71],
    [0x2f7edfc5724b9db7, 0xc5303afb2fdef449, 0x0000001a530f86c8],
    [0x3aaffb0586af6e91, 0x6dad6231beba8f5f, 0x00000010f1722833],
    [0x236fd04a30d09c48, 0x585cfbc466f10106, 0x0000000bf95f8479],
    [0xa03bfc070d4c800e, 0x1688717132aaee3a, 0x0000001c40bc55af],
    [0x912c320665d063b8, 0xfe4931b5b22c799a, 0x0000000af6aa2800],
    [0x70c952adb3cac509, 0x8896cd5ede647aaa, 0x000000003b349f22],
    [0xa02af34194fc0c4b, 0x665fcc325b50bc28, 0x000000080a5c2bd3],
    [0x56bb760377dff195, 0x087645fc41d24e48, 0x000000136b057878],
    [0xb5d575fb5e74f734, 0x90241c7db5467567, 0x0000001bf2870ff4],
    [0x57141fdde005ed98, 0x9ae17a7b1fef6a14, 0x0000001b23b30206],
    [0x2f3f341770fba7d0, 0xf9128aab6a021229, 0x0000000189b05913],
    [0x9c3e7636487205a0, 0x8df781140cfe7c4e, 0x00000004a67adda5],
    [0xe8a0b10d0224ad46, 0x90e849fdb3626a1a, 0x00000008be6d13a8],
    [0x4d0601b01ee7747f, 0x4557c733af863507, 0x0000000971ecb721],
    [0x5866e777eef827ef, 0x01ba4d747afc7ac7, 0x00000007bf19326e],
    [0x14dd950bd5bd2527, 0x71881539062c3101, 0x000000199ce9c749],
    [0x3afc81ff7ab754ed, 0x4978e4bf9920791c, 0x0000001119929c56],
    [0x538ba9b02c21fc9f, 0x280bc845fc23f467, 0x00000014171b256b],
    [0xe20b647d6b6d04e3, 0xe73d2fe93542fa0b, 0x00000018f3055bd7],
    [0x587fb6791bf44807, 0xd95e7df2018bfb60, 0x000000147771914f],
    [0x7447ad9b9b9060e7, 0x1951265ce0b4b1b6, 0x0000001297608b63],
    [0xdb72a3ef62c54154, 0x83ee1af688c86fe1, 0x0000001712c120a2],
    [0x3f1fc4a73a410995, 0xeb1b024a83b9a5e7, 0x000000080946798c],
    [0xe831fc4c4c26ace0, 0xdcfdd2da9590c33d, 0x0000000301fed949],
    [0xcc86ed31fbdaeb2d, 0x8056d018f1d00c6e, 0x000000113297b8a9],
    [0xac46669f7eaa9a06, 0x6ef018d32d998f37, 0x00000009a9abf573],
    [0x0b1d5e12867fd247, 0x0e22745d2733c9f0, 0x0000001ae05d27b1],
    [0x085efc7bb5d4f10f, 0xa7e405a0aa4ddd1e, 0x0000000b6beb26b2],
    [0x588d13217beb8cc0, 0x56572b2e60789fef, 0x0000000bcb5284f1],
    [0x8acc40eaa50692ed, 0x72346d8b8d96a425, 0x0000001a636d7584],
    [0x4c68f0081607a8e4, 0x6e05022c4318315a, 0x0000000109024ae6],
    [0x0f5765ea306be800, 0x75cddcde96df66bd, 0x00000017d94a2953],
    [0x3e74c996b5100000, 0x9af3e21da7558d2b, 0x000000136e9d2ab2],
    [0x2774867ea0000000, 0x4bd2c70964cc9bff, 0x0000000bc84f5a17],
    [0x092c2a4000000000, 0x36ef349318acec3a, 0x000000056c8f927f],
    [0x03d6800000000000, 0x46a8c3efed6c7d8b, 0x0000001d9e948e5c],
    [0x4100000000000000, 0x54a8258a2a926f90, 0x000000157c14366f],
    [0x0000000000000000, 0x1a8c6164e7c9ed4a, 0x00000019ebd3869a],
    [0x0000000000000000, 0x9cf8980e21c06400, 0x0000000613e6ebd7],
    [0x0000000000000000, 0xe242cb69f6e80000, 0x000000146626da72],
    [0x0000000000000000, 0x7e279c6310000000, 0x0000001abf9c2798],
    [0x0000000000000000, 0x29adcaa000000000, 0x00000005b3e2586a],
    [0x0000000000000000, 0xe622400000000000, 0x00000018b7cbe521],
    [0x0000000000000000, 0x8680000000000000, 0x00000007e48914f1],
    [0x0000000000000000, 0x0000000000000000, 0x0000001a6ea3fd21],
    [0x0000000000000000, 0x0000000000000000, 0x00000007aef40a00],
];
